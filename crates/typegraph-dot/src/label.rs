//! HTML-like table labels, one builder per entity variant.
//!
//! All free text passes through [`escape_html`]. Rows that edges start from
//! carry a `PORT` equal to the property name or the singular member type,
//! normalized by [`escape_port`] so that multi-line text stays one attribute.

use std::fmt::Write;

use typegraph_core::{AliasType, Entity, EnumType, ObjectType, UnionType, singularize};

use crate::dot::{escape_html, escape_port};
use crate::options::Palette;

const TABLE_OPEN: &str =
    r#"<TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0" CELLPADDING="4" BGCOLOR="white">"#;
const TABLE_CLOSE: &str = "</TABLE>";

pub fn entity_label(entity: &Entity, palette: &Palette) -> String {
    match entity {
        Entity::Object(object) => object_label(object, palette),
        Entity::Enum(enumeration) => enum_label(enumeration),
        Entity::Union(union) => union_label(union),
        Entity::Alias(alias) => alias_label(alias),
    }
}

fn colored(text: &str, color: &str) -> String {
    format!(r#"<FONT COLOR="{color}">{text}</FONT>"#)
}

fn marker_row(out: &mut String, marker: &str) {
    let _ = write!(out, "<TR><TD><I>&#171;{marker}&#187;</I></TD></TR>");
}

fn title_row(out: &mut String, name: &str, colspan: usize) {
    if colspan > 1 {
        let _ = write!(
            out,
            r#"<TR><TD COLSPAN="{colspan}"><B>{}</B></TD></TR>"#,
            escape_html(name)
        );
    } else {
        let _ = write!(out, "<TR><TD><B>{}</B></TD></TR>", escape_html(name));
    }
}

pub fn object_label(object: &ObjectType, palette: &Palette) -> String {
    let mut out = String::from(TABLE_OPEN);
    title_row(&mut out, &object.name, 2);
    for property in &object.properties {
        let color = if property.nullable {
            palette.muted
        } else {
            palette.full
        };
        let _ = write!(
            out,
            r#"<TR><TD ALIGN="LEFT">{}</TD><TD ALIGN="LEFT" PORT="{}">{}</TD></TR>"#,
            colored(&escape_html(&property.name), color),
            escape_port(&property.name),
            colored(&escape_html(&property.ty), color),
        );
    }
    out.push_str(TABLE_CLOSE);
    out
}

/// Enum values are HTML-escaped like every other cell, so a string literal
/// such as `"OPEN"` is shown as `&quot;OPEN&quot;` and cannot break the
/// surrounding markup.
pub fn enum_label(enumeration: &EnumType) -> String {
    let mut out = String::from(TABLE_OPEN);
    marker_row(&mut out, "enum");
    title_row(&mut out, &enumeration.name, 1);
    for value in &enumeration.values {
        let _ = write!(out, "<TR><TD>{}</TD></TR>", escape_html(value));
    }
    out.push_str(TABLE_CLOSE);
    out
}

pub fn union_label(union: &UnionType) -> String {
    let mut out = String::from(TABLE_OPEN);
    marker_row(&mut out, "union");
    title_row(&mut out, &union.name, 1);
    for ty in &union.types {
        let _ = write!(
            out,
            r#"<TR><TD PORT="{}">{}</TD></TR>"#,
            escape_port(singularize(ty)),
            escape_html(ty)
        );
    }
    out.push_str(TABLE_CLOSE);
    out
}

pub fn alias_label(alias: &AliasType) -> String {
    let mut out = String::from(TABLE_OPEN);
    marker_row(&mut out, "alias");
    title_row(&mut out, &alias.name, 1);
    let _ = write!(out, "<TR><TD>{}</TD></TR>", escape_html(&alias.ty));
    out.push_str(TABLE_CLOSE);
    out
}
