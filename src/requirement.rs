//! Loose parser for requirement declaration lines.
//!
//! Handles the PEP 508-style grammar found in real-world manifests:
//! `name[extras]comparator version; marker`, with comma-separated
//! comparator chains and the legacy parenthesized form. Parsing is
//! best-effort: a line yields a [`Requirement`] whenever a package name
//! can be extracted, and anything unreadable past the name is dropped
//! rather than reported.

/// Version comparators recognized in constraint segments.
///
/// Ordered so longer operators match first (`>=` before `>`, `===`
/// before `==`).
const COMPARATORS: [&str; 8] = ["===", "==", "!=", "~=", ">=", "<=", ">", "<"];

/// One comparator/version pair from a requirement's constraint chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub comparator: &'static str,
    pub version: String,
}

/// A parsed requirement declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name. Never empty.
    pub name: String,
    /// Bracketed extras (`pkg[extra1,extra2]`). Parsed so the name ends
    /// in the right place; not surfaced in loader output.
    pub extras: Vec<String>,
    /// Comparator/version pairs in source order.
    pub constraints: Vec<VersionConstraint>,
    /// Environment marker after `;`, kept verbatim. Never evaluated —
    /// both marker variants of the same package stay separate entries.
    pub marker: Option<String>,
}

impl Requirement {
    /// Parse a single declaration line, as leniently as possible.
    ///
    /// Returns `None` only when no package name can be extracted (empty
    /// line, comment, directive, or a line starting with something that
    /// cannot begin a name).
    pub fn parse_loose(line: &str) -> Option<Self> {
        let trimmed = line.trim();

        // Environment marker: everything after the first ';'.
        let (spec, marker) = match trimmed.find(';') {
            Some(pos) => (
                trimmed[..pos].trim_end(),
                Some(trimmed[pos + 1..].trim()).filter(|m| !m.is_empty()),
            ),
            None => (trimmed, None),
        };

        let name_end = spec
            .char_indices()
            .find(|&(_, c)| !is_name_char(c))
            .map_or(spec.len(), |(pos, _)| pos);
        let name = &spec[..name_end];
        if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            return None;
        }

        let mut rest = spec[name_end..].trim_start();

        let mut extras = Vec::new();
        if let Some(after_bracket) = rest.strip_prefix('[') {
            match after_bracket.find(']') {
                Some(close) => {
                    extras = after_bracket[..close]
                        .split(',')
                        .map(str::trim)
                        .filter(|extra| !extra.is_empty())
                        .map(str::to_string)
                        .collect();
                    rest = after_bracket[close + 1..].trim_start();
                }
                // Unterminated extras bracket: nothing past the name is
                // readable.
                None => rest = "",
            }
        }

        // Direct references (`name @ https://...`) carry no version spec.
        let constraints = if rest.starts_with('@') {
            Vec::new()
        } else {
            parse_constraints(strip_parens(rest))
        };

        Some(Self {
            name: name.to_string(),
            extras,
            constraints,
            marker: marker.map(str::to_string),
        })
    }

    /// Compose the constraint chain into a single specifier string: each
    /// pair as `comparator` immediately followed by `version`, joined
    /// with commas, in source order. Zero constraints compose to `""`.
    pub fn version_spec(&self) -> String {
        self.constraints
            .iter()
            .map(|constraint| format!("{}{}", constraint.comparator, constraint.version))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

/// Strip the legacy parenthesized specifier form: `pkg (>=1.0, <2.0)`.
fn strip_parens(spec: &str) -> &str {
    let Some(inner) = spec.strip_prefix('(') else {
        return spec;
    };
    match inner.find(')') {
        Some(close) => &inner[..close],
        None => inner,
    }
}

/// Split a specifier into comparator/version pairs.
///
/// Segments with no recognizable comparator or an empty version are
/// skipped individually; the surrounding declaration still parses.
fn parse_constraints(spec: &str) -> Vec<VersionConstraint> {
    spec.split(',')
        .filter_map(|segment| {
            let segment = segment.trim();
            let comparator = COMPARATORS
                .into_iter()
                .find(|op| segment.starts_with(op))?;
            let version = segment[comparator.len()..].trim();
            if version.is_empty() {
                return None;
            }
            Some(VersionConstraint {
                comparator,
                version: version.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        let req = Requirement::parse_loose("httpx").unwrap();
        assert_eq!(req.name, "httpx");
        assert!(req.extras.is_empty());
        assert!(req.constraints.is_empty());
        assert_eq!(req.marker, None);
        assert_eq!(req.version_spec(), "");
    }

    #[test]
    fn test_single_constraint() {
        let req = Requirement::parse_loose("flask==2.0.0").unwrap();
        assert_eq!(req.name, "flask");
        assert_eq!(req.version_spec(), "==2.0.0");
    }

    #[test]
    fn test_extras_dropped_from_name() {
        let req = Requirement::parse_loose("gidgethub[httpx]>4.0.0").unwrap();
        assert_eq!(req.name, "gidgethub");
        assert_eq!(req.extras, vec!["httpx"]);
        assert_eq!(req.version_spec(), ">4.0.0");
    }

    #[test]
    fn test_multiple_extras() {
        let req = Requirement::parse_loose("uvicorn[standard, watch]>=0.20.0").unwrap();
        assert_eq!(req.name, "uvicorn");
        assert_eq!(req.extras, vec!["standard", "watch"]);
        assert_eq!(req.version_spec(), ">=0.20.0");
    }

    #[test]
    fn test_constraint_chain_preserves_order() {
        let req = Requirement::parse_loose("pkg>=1.0,<2.0").unwrap();
        assert_eq!(
            req.constraints,
            vec![
                VersionConstraint {
                    comparator: ">=",
                    version: "1.0".to_string(),
                },
                VersionConstraint {
                    comparator: "<",
                    version: "2.0".to_string(),
                },
            ]
        );
        assert_eq!(req.version_spec(), ">=1.0,<2.0");
    }

    #[test]
    fn test_marker_kept_verbatim_and_not_filtering() {
        let req = Requirement::parse_loose("django>2.1; os_name != 'nt'").unwrap();
        assert_eq!(req.name, "django");
        assert_eq!(req.version_spec(), ">2.1");
        assert_eq!(req.marker.as_deref(), Some("os_name != 'nt'"));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let req = Requirement::parse_loose("  requests >= 2.25.0 , < 3 ").unwrap();
        assert_eq!(req.name, "requests");
        assert_eq!(req.version_spec(), ">=2.25.0,<3");
    }

    #[test]
    fn test_arbitrary_equality() {
        let req = Requirement::parse_loose("pinned===1.0+local").unwrap();
        assert_eq!(req.constraints[0].comparator, "===");
        assert_eq!(req.version_spec(), "===1.0+local");
    }

    #[test]
    fn test_parenthesized_specifier() {
        let req = Requirement::parse_loose("zope.interface (>=4.0, <5.0)").unwrap();
        assert_eq!(req.name, "zope.interface");
        assert_eq!(req.version_spec(), ">=4.0,<5.0");
    }

    #[test]
    fn test_direct_reference_has_no_constraints() {
        let req = Requirement::parse_loose("mypkg @ https://example.com/mypkg.whl").unwrap();
        assert_eq!(req.name, "mypkg");
        assert!(req.constraints.is_empty());
        assert_eq!(req.version_spec(), "");
    }

    #[test]
    fn test_name_with_dots_dashes_underscores() {
        let req = Requirement::parse_loose("ruamel.yaml-clib_ext>=0.2").unwrap();
        assert_eq!(req.name, "ruamel.yaml-clib_ext");
    }

    #[test]
    fn test_no_name_yields_none() {
        assert!(Requirement::parse_loose("").is_none());
        assert!(Requirement::parse_loose("   ").is_none());
        assert!(Requirement::parse_loose("# just a comment").is_none());
        assert!(Requirement::parse_loose("==1.0").is_none());
        assert!(Requirement::parse_loose("-r other.txt").is_none());
    }

    #[test]
    fn test_unterminated_extras_bracket() {
        let req = Requirement::parse_loose("pkg[extra>=1.0").unwrap();
        assert_eq!(req.name, "pkg");
        assert!(req.constraints.is_empty());
    }

    #[test]
    fn test_unreadable_segment_skipped_not_fatal() {
        // "2.0" has no comparator; the readable segment survives.
        let req = Requirement::parse_loose("pkg 2.0, >=1.0").unwrap();
        assert_eq!(req.name, "pkg");
        assert_eq!(req.version_spec(), ">=1.0");
    }

    #[test]
    fn test_marker_only_after_semicolon() {
        let req = Requirement::parse_loose("pkg;").unwrap();
        assert_eq!(req.name, "pkg");
        assert_eq!(req.marker, None);
    }
}
