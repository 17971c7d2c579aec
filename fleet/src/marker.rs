//! Map-marker model: what the map widget needs to draw one equipment record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map widget is an external collaborator. This module produces plain
//! data for it (geometry, an inline SVG icon as a data URI, popup markup) so
//! the browser binding layer only has to copy fields across.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use crate::catalog::{EquipmentId, EquipmentRecord};
use crate::category::Category;
use crate::format::{escape_html, format_rubles};

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

/// Pin fill for records that can be ordered.
pub const AVAILABLE_COLOR: &str = "#8B5CF6";
/// Pin fill for records that are currently rented out.
pub const BUSY_COLOR: &str = "#ea384c";
/// Popup badge background for available records.
pub const AVAILABLE_BADGE_COLOR: &str = "#22c55e";

pub const ICON_SIZE: [i32; 2] = [40, 50];
/// Anchors the pin tip on the coordinate.
pub const ICON_OFFSET: [i32; 2] = [-20, -50];

/// Availability badge text.
#[must_use]
pub fn availability_label(available: bool) -> &'static str {
    if available { "Доступно" } else { "Занято" }
}

#[must_use]
pub fn marker_color(available: bool) -> &'static str {
    if available { AVAILABLE_COLOR } else { BUSY_COLOR }
}

#[must_use]
pub fn marker_glyph(category: Category) -> &'static str {
    category.glyph()
}

/// Pin-shaped SVG with the category glyph inside a white disc.
#[must_use]
pub fn icon_svg(category: Category, available: bool) -> String {
    let color = marker_color(available);
    let glyph = marker_glyph(category);
    format!(
        concat!(
            r#"<svg width="40" height="50" xmlns="http://www.w3.org/2000/svg"><g>"#,
            r#"<path d="M20 0C12.3 0 6 6.3 6 14c0 10.5 14 36 14 36s14-25.5 14-36c0-7.7-6.3-14-14-14z" fill="{color}"/>"#,
            r#"<circle cx="20" cy="14" r="8" fill="white"/>"#,
            r#"<text x="20" y="18" font-size="16" text-anchor="middle" fill="{color}">{glyph}</text>"#,
            r#"</g></svg>"#,
        ),
        color = color,
        glyph = glyph,
    )
}

/// `data:` URI embedding [`icon_svg`] as base64.
#[must_use]
pub fn icon_data_uri(category: Category, available: bool) -> String {
    let encoded = STANDARD.encode(icon_svg(category, available).as_bytes());
    format!("data:image/svg+xml;base64,{encoded}")
}

/// Custom image layout for a placemark.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub href: String,
    pub size: [i32; 2],
    pub offset: [i32; 2],
}

impl MarkerIcon {
    #[must_use]
    pub fn for_record(record: &EquipmentRecord) -> Self {
        Self { href: icon_data_uri(record.category, record.available), size: ICON_SIZE, offset: ICON_OFFSET }
    }
}

/// Read-only info panel opened from a marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Balloon {
    pub header: String,
    pub body: String,
    pub hint: String,
}

impl Balloon {
    #[must_use]
    pub fn for_record(record: &EquipmentRecord) -> Self {
        let badge_color = if record.available { AVAILABLE_BADGE_COLOR } else { BUSY_COLOR };
        let body = format!(
            concat!(
                r#"<div style="padding: 8px;">"#,
                r#"<p style="margin: 4px 0;">{description}</p>"#,
                r#"<p style="margin: 4px 0;"><strong>Адрес:</strong> {location}</p>"#,
                r#"<p style="margin: 4px 0;"><strong>Цена:</strong> {price}/смену</p>"#,
                r#"<p style="margin: 4px 0;"><span style="display: inline-block; padding: 4px 8px; "#,
                r#"border-radius: 4px; background: {badge_color}; color: white; font-size: 12px;">{badge}</span></p>"#,
                r#"</div>"#,
            ),
            description = escape_html(&record.description),
            location = escape_html(&record.location),
            price = format_rubles(record.price),
            badge_color = badge_color,
            badge = availability_label(record.available),
        );
        Self {
            header: format!("<strong>{}</strong>", escape_html(&record.name)),
            body,
            hint: record.name.clone(),
        }
    }
}

/// Everything needed to place one record on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub id: EquipmentId,
    pub coordinates: [f64; 2],
    pub icon: MarkerIcon,
    pub balloon: Balloon,
}

impl Marker {
    #[must_use]
    pub fn from_record(record: &EquipmentRecord) -> Self {
        Self {
            id: record.id,
            coordinates: record.coordinates(),
            icon: MarkerIcon::for_record(record),
            balloon: Balloon::for_record(record),
        }
    }
}

/// True when `markers` shows exactly `ids`, in order. A widget can then move
/// its existing placemarks instead of rebuilding them.
#[must_use]
pub fn same_ids(ids: &[EquipmentId], markers: &[Marker]) -> bool {
    ids.len() == markers.len() && ids.iter().zip(markers).all(|(id, marker)| *id == marker.id)
}
