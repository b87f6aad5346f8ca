//! Color palette for the graph view.
//!
//! Fixed small palette keyed by node type tag. The tag set is open;
//! anything unrecognized falls back to neutral gray.

use egui::Color32;

/// Fill color for a node marker.
pub fn node_fill(node_type: &str) -> Color32 {
    match node_type.to_ascii_lowercase().as_str() {
        "vendor" => Color32::from_rgb(100, 181, 246), // Light blue
        "invoice" => Color32::from_rgb(129, 199, 132), // Light green
        "transaction" => Color32::from_rgb(251, 191, 36), // Amber
        "product" => Color32::from_rgb(206, 147, 216), // Light purple
        _ => Color32::from_rgb(158, 158, 158),        // Gray
    }
}

/// Border color for a node marker.
pub fn node_border(node_type: &str) -> Color32 {
    match node_type.to_ascii_lowercase().as_str() {
        "vendor" => Color32::from_rgb(25, 118, 210), // Blue
        "invoice" => Color32::from_rgb(56, 142, 60), // Green
        "transaction" => Color32::from_rgb(217, 119, 6), // Amber dark
        "product" => Color32::from_rgb(142, 36, 170), // Purple
        _ => Color32::from_rgb(96, 125, 139),        // Gray dark
    }
}

/// Edge line color.
pub fn edge_color() -> Color32 {
    Color32::from_rgb(107, 114, 128) // Gray-500
}

/// Node label text color.
pub fn label_color() -> Color32 {
    Color32::from_rgb(209, 213, 219) // Gray-300
}

/// Canvas background.
pub fn background() -> Color32 {
    Color32::from_rgb(25, 25, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_fall_back_to_gray() {
        assert_eq!(node_fill("warehouse"), Color32::from_rgb(158, 158, 158));
        assert_eq!(node_fill(""), Color32::from_rgb(158, 158, 158));
        assert_eq!(node_border("warehouse"), Color32::from_rgb(96, 125, 139));
    }

    #[test]
    fn known_types_get_distinct_fills() {
        let fills = [
            node_fill("vendor"),
            node_fill("invoice"),
            node_fill("transaction"),
            node_fill("product"),
        ];
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn type_matching_is_case_insensitive() {
        assert_eq!(node_fill("Vendor"), node_fill("vendor"));
        assert_eq!(node_fill("INVOICE"), node_fill("invoice"));
    }
}
