//! Plain-text tech sheets.
//!
//! Numbers use the default `f64` `Display` output (`100`, `12.5`); no rounding is applied.
//! Lines are joined with `\n` and there is no trailing newline.

use crate::model::DesignObject;
use std::str::FromStr;

/// Header and column texts of the two sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLabels {
    pub client_header: String,
    pub workshop_header: String,
    pub id_column: String,
    pub type_column: String,
    pub width_column: String,
    pub height_column: String,
}

impl Default for SheetLabels {
    fn default() -> Self {
        Self::english()
    }
}

impl SheetLabels {
    pub fn english() -> Self {
        Self {
            client_header: "Tech sheet for client:".to_string(),
            workshop_header: "Tech sheet for workshop:".to_string(),
            id_column: "ID".to_string(),
            type_column: "Type".to_string(),
            width_column: "Width".to_string(),
            height_column: "Height".to_string(),
        }
    }

    pub fn russian() -> Self {
        Self {
            client_header: "Тех.лист для клиента:".to_string(),
            workshop_header: "Тех.лист для цеха:".to_string(),
            id_column: "ID".to_string(),
            type_column: "Тип".to_string(),
            width_column: "Ширина".to_string(),
            height_column: "Высота".to_string(),
        }
    }

    pub fn for_locale(locale: SheetLocale) -> Self {
        match locale {
            SheetLocale::En => Self::english(),
            SheetLocale::Ru => Self::russian(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetLocale {
    #[default]
    En,
    Ru,
}

impl FromStr for SheetLocale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            _ => Err(()),
        }
    }
}

pub fn format_client_sheet(objects: &[DesignObject]) -> String {
    format_client_sheet_with(objects, &SheetLabels::default())
}

pub fn format_workshop_sheet(objects: &[DesignObject]) -> String {
    format_workshop_sheet_with(objects, &SheetLabels::default())
}

/// `- {id}: {width}×{height} ({type})` per object, after the client header.
pub fn format_client_sheet_with(objects: &[DesignObject], labels: &SheetLabels) -> String {
    let mut lines = Vec::with_capacity(objects.len() + 1);
    lines.push(labels.client_header.clone());
    for obj in objects {
        lines.push(format!(
            "- {}: {}×{} ({})",
            obj.id,
            obj.width(),
            obj.height(),
            obj.kind()
        ));
    }
    lines.join("\n")
}

/// Tab-separated table: header, column names, then one row per object.
pub fn format_workshop_sheet_with(objects: &[DesignObject], labels: &SheetLabels) -> String {
    let mut lines = Vec::with_capacity(objects.len() + 2);
    lines.push(labels.workshop_header.clone());
    lines.push(
        [
            labels.id_column.as_str(),
            labels.type_column.as_str(),
            labels.width_column.as_str(),
            labels.height_column.as_str(),
        ]
        .join("\t"),
    );
    for obj in objects {
        lines.push(format!(
            "{}\t{}\t{}\t{}",
            obj.id,
            obj.kind(),
            obj.width(),
            obj.height()
        ));
    }
    lines.join("\n")
}
