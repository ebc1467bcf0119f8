//! Inline `style` attribute editing, like `element.style.<prop> = value`.

use markup5ever_rcdom::Handle;

use super::dom::{get_node_attr, set_node_attr};

fn declarations(node: &Handle) -> Vec<(String, String)> {
    get_node_attr(node, "style")
        .unwrap_or_default()
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() {
                None
            } else {
                Some((property.to_ascii_lowercase(), value.to_string()))
            }
        })
        .collect()
}

fn write_declarations(node: &Handle, declarations: &[(String, String)]) {
    if declarations.is_empty() {
        set_node_attr(node, "style", None);
        return;
    }

    let style = declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ");
    set_node_attr(node, "style", Some(style));
}

pub fn get_style_property(node: &Handle, property: &str) -> Option<String> {
    declarations(node)
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(property))
        .map(|(_, value)| value)
}

/// Sets a declaration; an empty value removes it
pub fn set_style_property(node: &Handle, property: &str, value: &str) {
    let property = property.to_ascii_lowercase();
    let mut declarations = declarations(node);

    if value.is_empty() {
        declarations.retain(|(name, _)| *name != property);
    } else if let Some(existing) = declarations.iter_mut().find(|(name, _)| *name == property) {
        existing.1 = value.to_string();
    } else {
        declarations.push((property, value.to_string()));
    }

    write_declarations(node, &declarations);
}
