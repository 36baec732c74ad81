//! Column-label flattening.

use fbref_model::{ColumnLabel, TableBlock};

/// Flattens one label: multi-level labels join their levels with `_` and
/// are trimmed; single-level labels are returned unchanged.
///
/// # Examples
///
/// ```
/// use fbref_model::ColumnLabel;
/// use fbref_transform::columns::flatten_label;
///
/// assert_eq!(flatten_label(&ColumnLabel::pair("Passing", "Cmp")), "Passing_Cmp");
/// assert_eq!(flatten_label(&ColumnLabel::single("Player")), "Player");
/// ```
pub fn flatten_label(label: &ColumnLabel) -> String {
    match label.levels.as_slice() {
        [] => String::new(),
        [single] => single.clone(),
        levels => levels.join("_").trim().to_string(),
    }
}

/// Flattened, unique column names of a table.
pub fn flattened_names(table: &TableBlock) -> Vec<String> {
    unique_names(table.columns.iter().map(flatten_label).collect())
}

/// Suffixes repeated names with `.1`, `.2`, ... in order of appearance.
pub fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 0usize;
        while unique.contains(&candidate) {
            suffix += 1;
            candidate = format!("{name}.{suffix}");
        }
        unique.push(candidate);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_joined_levels() {
        let label = ColumnLabel::pair(" Expected", "xG ");
        assert_eq!(flatten_label(&label), "Expected_xG");
    }

    #[test]
    fn single_level_is_untouched() {
        let label = ColumnLabel::single(" Min ");
        assert_eq!(flatten_label(&label), " Min ");
    }

    #[test]
    fn repeated_names_get_suffixes() {
        let names = unique_names(vec!["Cmp".into(), "Att".into(), "Cmp".into(), "Cmp".into()]);
        assert_eq!(names, vec!["Cmp", "Att", "Cmp.1", "Cmp.2"]);
    }
}
