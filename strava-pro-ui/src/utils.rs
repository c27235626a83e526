//! Class name composition.

/// Join class fragments into one `class` attribute value.
///
/// Empty fragments are dropped and runs of whitespace collapse to a single
/// space, so callers can pass optional extra classes without guarding them.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .flat_map(|fragment| fragment.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`cn`], keeping only the fragments whose flag is set.
pub fn cn_if(classes: &[(&str, bool)]) -> String {
    let kept: Vec<&str> = classes
        .iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(fragment, _)| *fragment)
        .collect();
    cn(&kept)
}
