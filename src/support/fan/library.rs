use std::{collections::HashMap, fs, path::Path};

use super::{FanCurve, FanCurveError, fan_id};

/// Fan curves keyed by fan identifier.
///
/// Identifiers are stored without a `.csv` suffix, and lookups accept either
/// form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FanLibrary {
    curves: HashMap<String, FanCurve>,
}

impl FanLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.csv` file in a directory, keyed by file stem.
    ///
    /// # Errors
    ///
    /// Returns [`FanCurveError`] if the directory cannot be listed or any
    /// curve file fails to load. Failures inside a file are wrapped in
    /// [`FanCurveError::File`].
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, FanCurveError> {
        let mut library = Self::new();

        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() || path.extension().is_none_or(|ext| ext != "csv") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let id = id.to_owned();

            let curve = FanCurve::from_path(&path).map_err(FanCurveError::in_file(&path))?;
            tracing::debug!(fan = %id, samples = curve.len(), "loaded fan curve");
            library.insert(id, curve);
        }

        Ok(library)
    }

    /// Adds or replaces a curve, returning the previous one.
    pub fn insert(&mut self, id: impl AsRef<str>, curve: FanCurve) -> Option<FanCurve> {
        self.curves.insert(fan_id(id.as_ref()).to_owned(), curve)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FanCurve> {
        self.curves.get(fan_id(id))
    }

    /// Identifiers in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.curves.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
