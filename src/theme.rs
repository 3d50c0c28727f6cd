use serde::{Deserialize, Serialize};

/// Colors used for the legend container and for swatches whose own color is
/// unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub text: String,
    pub border: String,
    pub heading: String,
    pub node_default: String,
    pub edge_default: String,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            border: "#cccccc".to_string(),
            heading: "#222222".to_string(),
            node_default: "#000000".to_string(),
            edge_default: "#000000".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1f1f25".to_string(),
            text: "#f0f0f5".to_string(),
            border: "#3a3a40".to_string(),
            heading: "#7ddba3".to_string(),
            node_default: "#7ddba3".to_string(),
            edge_default: "#b5b8c5".to_string(),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
