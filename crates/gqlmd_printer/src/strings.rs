//! Fixed literals of the generated pages.

pub const FIELDS: &str = "Fields";
pub const INTERFACES: &str = "Interfaces";
pub const POSSIBLE_TYPES: &str = "Possible types";
pub const VALUES: &str = "Values";
pub const ARGUMENTS: &str = "Arguments";
pub const IMPLEMENTED_BY: &str = "Implemented by";
pub const MEMBER_OF: &str = "Member of";
pub const SPECIFICATION: &str = "Specification";

pub const DEPRECATED: &str = "deprecated";
pub const NO_DESCRIPTION_TEXT: &str = "No description";
pub const NON_NULL: &str = "non-null";
pub const LIST: &str = "list";

pub const HIDE_DEPRECATED: &str = r#"<><span className="deprecated">Hide deprecated</span></>"#;
pub const SHOW_DEPRECATED: &str = r#"<><span className="deprecated">Show deprecated</span></>"#;

pub const CODE_LANGUAGE: &str = "graphql";
pub const BULLET: &str = "<Bullet />";

pub const CSS_BADGE_SECONDARY: &str = "badge--secondary";
pub const CSS_BADGE_DEPRECATED: &str = "badge--deprecated badge--secondary";
