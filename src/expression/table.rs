//! Expression table — which morph targets express each emotion.
//!
//! Static configuration data: one entry per emotion naming the face
//! model's blend shapes (by index) that fire when the emotion is shown
//! at full strength, and how hard each fires. Loaded once at startup;
//! a JSON file can override the builtin data for a different face model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::expression::mapper::ExpressionError;

/// One morph-target contribution: blend shape `index` fires at
/// `intensity` when the owning emotion is expressed at strength 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MorphTarget {
    pub index: usize,
    pub intensity: f32,
}

/// Mapping from emotion name to its morph-target contributions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpressionTable {
    entries: HashMap<String, Vec<MorphTarget>>,
}

impl ExpressionTable {
    /// The canonical table for the `facecap` face model (47 blend shapes).
    ///
    /// Index legend for the targets used here: 0 browInnerUp,
    /// 1/2 browDown L/R, 3/4 browOuterUp L/R, 5/6 eyeLookUp L/R,
    /// 17/18 eyeWide L/R, 22/23 noseSneer L/R, 24 jawOpen,
    /// 37/38 mouthSmile L/R, 39/40 mouthFrown L/R, 45/46 cheekSquint L/R.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        let mut add = |name: &str, pairs: &[(usize, f32)]| {
            entries.insert(
                name.to_string(),
                pairs
                    .iter()
                    .map(|&(index, intensity)| MorphTarget { index, intensity })
                    .collect(),
            );
        };

        add("Happiness", &[(0, 0.4), (3, 0.4), (4, 0.4), (37, 0.6), (38, 0.6)]);
        add("Sadness", &[(1, 0.4), (2, 0.4), (39, 0.6), (40, 0.6)]);
        add("Fear", &[(5, 0.3), (6, 0.3), (17, 0.4), (18, 0.4), (24, 0.2)]);
        add("Disgust", &[(22, 0.4), (23, 0.4), (45, 0.3), (46, 0.3)]);
        add("Anger", &[(1, 0.5), (2, 0.5), (39, 0.4), (40, 0.4)]);
        add("Surprise", &[(0, 0.6), (3, 0.5), (4, 0.5), (17, 0.5), (18, 0.5)]);
        add("Anticipation", &[(0, 0.3), (3, 0.3), (4, 0.3), (37, 0.3), (38, 0.3)]);
        add("Trust", &[(0, 0.3), (3, 0.3), (4, 0.3), (37, 0.3), (38, 0.3)]);
        add(
            "Guilt",
            &[(1, 0.3), (2, 0.3), (39, 0.3), (40, 0.3), (45, 0.3), (46, 0.3)],
        );
        add("Love", &[(0, 0.4), (3, 0.4), (4, 0.4), (37, 0.4), (38, 0.4)]);
        add("Saudade", &[(1, 0.2), (2, 0.2), (39, 0.2), (40, 0.2)]);
        add("Envy", &[(0, 0.3), (1, 0.3), (2, 0.3), (39, 0.3), (40, 0.3)]);
        add("Bittersweetness", &[(0, 0.3), (1, 0.3), (2, 0.3), (37, 0.3), (38, 0.3)]);
        add("Loneliness", &[(1, 0.4), (2, 0.4), (39, 0.4), (40, 0.4)]);
        add(
            "Nostalgia",
            &[(0, 0.3), (3, 0.3), (4, 0.3), (37, 0.3), (38, 0.3), (45, 0.3), (46, 0.3)],
        );

        Self { entries }
    }

    /// Morph targets for an emotion name, or `None` if the table has no
    /// entry (a catalog/table mismatch the caller should surface).
    pub fn targets(&self, emotion: &str) -> Option<&[MorphTarget]> {
        self.entries.get(emotion).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the table invariants: every base intensity in `[0,1]`.
    ///
    /// Morph indices are only bounds-checked against a concrete model at
    /// apply time — the table itself does not know the model's shape count.
    pub fn validate(&self) -> Result<(), ExpressionError> {
        for (name, targets) in &self.entries {
            for t in targets {
                if !t.intensity.is_finite() || !(0.0..=1.0).contains(&t.intensity) {
                    return Err(ExpressionError::InvalidIntensity {
                        emotion: name.clone(),
                        index: t.index,
                        intensity: t.intensity,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ExpressionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load an expression table from a JSON file, falling back to the
/// builtin table when the file is missing, unparsable, or invalid.
pub fn load_table(path: &Path) -> ExpressionTable {
    let table = match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str::<ExpressionTable>(&json) {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unparsable expression table, using builtin");
                return ExpressionTable::builtin();
            }
        },
        Err(_) => return ExpressionTable::builtin(),
    };

    match table.validate() {
        Ok(()) => table,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid expression table, using builtin");
            ExpressionTable::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::catalog::Emotion;

    #[test]
    fn builtin_covers_every_catalog_emotion() {
        let table = ExpressionTable::builtin();
        for e in Emotion::ALL {
            assert!(
                table.targets(e.name()).is_some(),
                "builtin table missing entry for {}",
                e
            );
        }
        assert_eq!(table.len(), Emotion::ALL.len());
    }

    #[test]
    fn builtin_passes_validation() {
        ExpressionTable::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_indices_fit_facecap_model() {
        // facecap.glb exposes 47 blend shapes (indices 0-46)
        let table = ExpressionTable::builtin();
        for e in Emotion::ALL {
            for t in table.targets(e.name()).unwrap() {
                assert!(t.index <= 46, "{} references index {}", e, t.index);
            }
        }
    }

    #[test]
    fn happiness_entry_matches_reference_data() {
        let table = ExpressionTable::builtin();
        let targets = table.targets("Happiness").unwrap();
        let expected = [(0, 0.4), (3, 0.4), (4, 0.4), (37, 0.6), (38, 0.6)];
        assert_eq!(targets.len(), expected.len());
        for (t, (idx, val)) in targets.iter().zip(expected) {
            assert_eq!(t.index, idx);
            assert_eq!(t.intensity, val);
        }
    }

    #[test]
    fn validation_rejects_out_of_range_intensity() {
        let json = r#"{"entries":{"Happiness":[{"index":0,"intensity":1.4}]}}"#;
        let table: ExpressionTable = serde_json::from_str(json).unwrap();
        let err = table.validate().unwrap_err();
        assert!(matches!(err, ExpressionError::InvalidIntensity { .. }));
    }

    #[test]
    fn load_table_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_table(&dir.path().join("nope.json"));
        assert_eq!(table.len(), Emotion::ALL.len());
    }

    #[test]
    fn load_table_reads_valid_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"entries":{"Happiness":[{"index":2,"intensity":0.9}]}}"#,
        )
        .unwrap();
        let table = load_table(&path);
        assert_eq!(table.len(), 1);
        assert_eq!(table.targets("Happiness").unwrap()[0].index, 2);
    }

    #[test]
    fn load_table_invalid_override_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.json");
        std::fs::write(
            &path,
            r#"{"entries":{"Fear":[{"index":5,"intensity":-0.1}]}}"#,
        )
        .unwrap();
        let table = load_table(&path);
        assert_eq!(table.len(), Emotion::ALL.len(), "should fall back to builtin");
    }
}
