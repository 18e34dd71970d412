use crate::encoding::Encoding;

/// Role a field plays in the mapping, as declared by its directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Regular column
    Plain,

    /// Primary key column. Still part of the column list.
    Key,

    /// Generated sequence column, populated by the backend. Never part of
    /// the column list.
    Sequence,

    /// Not mapped at all
    Ignored,

    /// Stored as the byte payload of a [`Serializable`](crate::Serializable) value
    SubDocument,

    /// Stored as text in the given structured encoding
    Encoded(Encoding),
}

impl Role {
    /// Sub-documents and encoded fields are opaque: their inner structure
    /// is never walked.
    pub fn is_opaque(self) -> bool {
        matches!(self, Role::SubDocument | Role::Encoded(_))
    }
}

/// Parsed per-field directive: `[column][:role|encoding][:reserved]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Alternate column name, `None` keeps the field's own name
    pub column: Option<&'a str>,

    pub role: Role,

    /// Third part, kept verbatim
    pub reserved: Option<&'a str>,
}

impl<'a> Directive<'a> {
    /// Parses a directive string.
    ///
    /// Parsing never fails: unknown role keywords leave the field plain and
    /// only the column name (if any) takes effect.
    pub fn parse(src: &'a str) -> Directive<'a> {
        let mut parts = src.splitn(3, ':');

        let column = parts.next().filter(|column| !column.is_empty());
        let role = match parts.next() {
            Some("key") => Role::Key,
            Some("isn") => Role::Sequence,
            Some("ignore") => Role::Ignored,
            Some("sub") => Role::SubDocument,
            Some(keyword) => Encoding::from_keyword(keyword)
                .map(Role::Encoded)
                .unwrap_or(Role::Plain),
            None => Role::Plain,
        };
        let reserved = parts.next();

        Directive {
            column,
            role,
            reserved,
        }
    }

    /// Effective column name for a field whose own name is `natural`.
    pub fn name(&self, natural: &'a str) -> &'a str {
        self.column.unwrap_or(natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directive() {
        let directive = Directive::parse("");
        assert_eq!(directive.column, None);
        assert_eq!(directive.role, Role::Plain);
        assert_eq!(directive.reserved, None);
        assert_eq!(directive.name("Address"), "Address");
    }

    #[test]
    fn rename_only() {
        let directive = Directive::parse("Street");
        assert_eq!(directive.name("Address"), "Street");
        assert_eq!(directive.role, Role::Plain);
    }

    #[test]
    fn role_keywords() {
        assert_eq!(Directive::parse("ID:key").role, Role::Key);
        assert_eq!(Directive::parse(":isn").role, Role::Sequence);
        assert_eq!(Directive::parse(":ignore").role, Role::Ignored);
        assert_eq!(Directive::parse(":sub").role, Role::SubDocument);
        assert_eq!(
            Directive::parse(":YAML").role,
            Role::Encoded(Encoding::Yaml)
        );
        assert_eq!(Directive::parse(":XML").role, Role::Encoded(Encoding::Xml));
        assert_eq!(
            Directive::parse(":JSON").role,
            Role::Encoded(Encoding::Json)
        );
    }

    #[test]
    fn role_keeps_natural_name() {
        let directive = Directive::parse(":sub");
        assert_eq!(directive.column, None);
        assert_eq!(directive.name("Sub"), "Sub");
    }

    #[test]
    fn unknown_role_is_plain_rename() {
        let directive = Directive::parse("Other:unknown");
        assert_eq!(directive.role, Role::Plain);
        assert_eq!(directive.name("Field"), "Other");
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(Directive::parse(":yaml").role, Role::Plain);
        assert_eq!(Directive::parse(":KEY").role, Role::Plain);
    }

    #[test]
    fn reserved_part_is_kept() {
        let directive = Directive::parse("Name:key:extra:more");
        assert_eq!(directive.column, Some("Name"));
        assert_eq!(directive.role, Role::Key);
        assert_eq!(directive.reserved, Some("extra:more"));
    }
}
