use std::path::Path;

use eyre::WrapErr;
use labdx_rules::{PatternTable, ReferenceTable, default_pattern_table, default_reference_table};

/// The reference and pattern tables an invocation analyzes against.
#[derive(Debug, Clone)]
pub struct Tables {
    pub reference: ReferenceTable,
    pub patterns: PatternTable,
}

impl Tables {
    pub fn builtin() -> Self {
        Self {
            reference: default_reference_table().clone(),
            patterns: default_pattern_table().clone(),
        }
    }

    /// Load tables, replacing each built-in table whose path is given.
    ///
    /// A custom reference table without a custom pattern table keeps the
    /// built-in patterns, which must then only name parameters the custom
    /// reference table defines.
    pub fn load(reference: Option<&Path>, patterns: Option<&Path>) -> eyre::Result<Self> {
        let Some(reference_path) = reference else {
            let reference = default_reference_table().clone();
            let patterns = match patterns {
                Some(path) => PatternTable::load(path, &reference)
                    .wrap_err_with(|| format!("loading pattern table {}", path.display()))?,
                None => default_pattern_table().clone(),
            };
            return Ok(Self { reference, patterns });
        };

        let reference = ReferenceTable::load(reference_path)
            .wrap_err_with(|| format!("loading reference table {}", reference_path.display()))?;
        let patterns = match patterns {
            Some(path) => PatternTable::load(path, &reference)
                .wrap_err_with(|| format!("loading pattern table {}", path.display()))?,
            None => PatternTable::new(default_pattern_table().patterns().to_vec(), &reference)
                .wrap_err("built-in patterns do not fit the custom reference table")?,
        };
        Ok(Self { reference, patterns })
    }
}
