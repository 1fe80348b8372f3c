//! Serialization of the stylesheet tree back to CSS text.
//!
//! Every node writes its recorded raws followed by its content, so an
//! unmodified tree prints back as the text it was parsed from. Declarations
//! other than the last one in a rule are always terminated by `;`; the last
//! one gets a semicolon only when [`RuleRaws::semicolon`](crate::RuleRaws) is set.

use std::fmt::{self, Display, Write};

use crate::parser::{Comment, Declaration, Node, Rule, RuleItem, StyleSheet};

impl Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/*{}*/", self.before, self.text)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.raws.before, self.property, self.raws.between, self.value
        )
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{{", self.raws.before, self.selector, self.raws.between)?;

        let last = self.last_declaration_index();
        for (index, item) in self.items.iter().enumerate() {
            match item {
                RuleItem::Declaration(decl) => {
                    Display::fmt(decl, f)?;
                    if Some(index) != last || self.raws.semicolon {
                        f.write_str(&decl.raws.after)?;
                        f.write_char(';')?;
                    }
                }
                RuleItem::Comment(comment) => Display::fmt(comment, f)?,
            }
        }

        write!(f, "{}}}", self.raws.after)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => Display::fmt(rule, f),
            Node::Comment(comment) => Display::fmt(comment, f),
        }
    }
}

impl Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            Display::fmt(node, f)?;
        }
        f.write_str(&self.after)
    }
}
