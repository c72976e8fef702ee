use crate::core::constants::{HEX_FILL_COLOR, HEX_LINE_COLOR, HEX_SELECTED_FILL_COLOR};
use crate::hex::{HexagonId, HexagonSet};
use crate::layers::base::{LayerProperties, LayerType};

/// One drawable hexagon with its resolved style
#[derive(Debug, Clone, PartialEq)]
pub struct HexagonFeature {
    pub id: HexagonId,
    pub fill_color: [u8; 4],
    pub line_color: [u8; 3],
    pub selected: bool,
}

/// The hexagon grid as handed to a renderer: wireframe cells, the
/// selected one filled with a distinct colour.
#[derive(Debug, Clone)]
pub struct HexagonLayer {
    properties: LayerProperties,
    features: Vec<HexagonFeature>,
}

impl HexagonLayer {
    pub const ID: &'static str = "hexagon-layer";

    pub fn build(hexagons: &HexagonSet, selected: Option<&HexagonId>) -> Self {
        let features = hexagons
            .iter()
            .map(|id| {
                let is_selected = selected == Some(id);
                HexagonFeature {
                    id: *id,
                    fill_color: if is_selected {
                        HEX_SELECTED_FILL_COLOR
                    } else {
                        HEX_FILL_COLOR
                    },
                    line_color: HEX_LINE_COLOR,
                    selected: is_selected,
                }
            })
            .collect();

        Self {
            properties: LayerProperties::new(Self::ID, LayerType::Hexagon),
            features,
        }
    }

    pub fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    pub fn features(&self) -> &[HexagonFeature] {
        &self.features
    }

    pub fn selected(&self) -> Option<&HexagonFeature> {
        self.features.iter().find(|f| f.selected)
    }
}
