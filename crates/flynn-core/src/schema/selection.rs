use indexmap::IndexSet;

/// Which fields take part in a mapping.
///
/// Name comparison is always case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every field
    All,

    /// No field at all. Bindings with this selection map zero columns.
    None,

    /// Only the named fields, stored lower-cased
    Given(IndexSet<String>),
}

impl Selection {
    /// Builds a selection from the requested field names.
    ///
    /// An empty name anywhere in the list, or an empty list, selects
    /// nothing. Otherwise the last entry decides: a trailing `*` selects
    /// everything, a trailing name selects every name in the list.
    pub fn new<S: AsRef<str>>(fields: impl IntoIterator<Item = S>) -> Selection {
        let mut all = false;
        let mut given = IndexSet::new();

        for field in fields {
            match field.as_ref() {
                "" => return Selection::None,
                "*" => all = true,
                name => {
                    all = false;
                    given.insert(name.to_lowercase());
                }
            }
        }

        if all {
            Selection::All
        } else if given.is_empty() {
            Selection::None
        } else {
            Selection::Given(given)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::None => false,
            Selection::Given(names) => names.contains(&name.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_selects_all() {
        let selection = Selection::new(["*"]);
        assert_eq!(selection, Selection::All);
        assert!(selection.contains("anything"));
    }

    #[test]
    fn empty_name_selects_none() {
        let selection = Selection::new([""]);
        assert!(selection.is_none());
        assert!(!selection.contains("name"));

        assert!(Selection::new(["name", ""]).is_none());
    }

    #[test]
    fn empty_list_selects_none() {
        assert!(Selection::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn given_is_case_insensitive() {
        let upper = Selection::new(["Name"]);
        let lower = Selection::new(["name"]);
        assert_eq!(upper, lower);
        assert!(upper.contains("NAME"));
        assert!(lower.contains("Name"));
        assert!(!lower.contains("FirstName"));
    }

    #[test]
    fn last_entry_decides() {
        assert_eq!(Selection::new(["name", "*"]), Selection::All);

        let selection = Selection::new(["*", "Name"]);
        assert_eq!(selection, Selection::new(["name"]));
        assert!(!selection.contains("other"));
    }
}
