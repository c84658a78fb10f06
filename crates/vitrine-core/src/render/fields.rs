//! Embed field normalizer and layout grouper

use crate::entities::{EmbedField, FieldGroup};

use super::shortcode::{translate_shortcodes, ShortcodeTable};

/// Test whether a field side carries displayable content.
///
/// Authors use pipe characters as visual-only separators and shortcode-only
/// text can collapse to nothing, so both are discounted: translate
/// shortcodes, strip pipes, collapse whitespace, and test what remains.
pub fn is_meaningful(text: Option<&str>, table: &ShortcodeTable) -> bool {
    let Some(text) = text else {
        return false;
    };
    let translated = translate_shortcodes(text, table);
    let stripped = translated.replace('|', "");
    stripped.split_whitespace().next().is_some()
}

/// Drop fields where neither the name nor the value is meaningful.
///
/// Order is preserved. A field may survive with only one meaningful side;
/// the empty side is omitted at render time, not dropped here.
pub fn normalize_fields(fields: &[EmbedField], table: &ShortcodeTable) -> Vec<EmbedField> {
    fields
        .iter()
        .filter(|f| {
            is_meaningful(f.name.as_deref(), table) || is_meaningful(f.value.as_deref(), table)
        })
        .cloned()
        .collect()
}

/// Group consecutive inline fields so they can render on one row.
///
/// Single left-to-right scan: a maximal run of `inline` fields becomes one
/// inline group; every non-inline field becomes its own singleton group.
/// Flattening the groups in order reproduces the input exactly.
pub fn group_fields(fields: Vec<EmbedField>) -> Vec<FieldGroup> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        if fields[i].inline {
            let start = i;
            while i < fields.len() && fields[i].inline {
                i += 1;
            }
            groups.push(FieldGroup {
                inline: true,
                items: fields[start..i].to_vec(),
            });
        } else {
            groups.push(FieldGroup {
                inline: false,
                items: vec![fields[i].clone()],
            });
            i += 1;
        }
    }
    groups
}
