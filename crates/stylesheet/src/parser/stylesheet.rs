/// Whitespace and punctuation recorded around a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclarationRaws {
    /// Text between the previous item (or the opening brace) and the property.
    pub before: String,
    /// Text between the property and the value, colon included.
    pub between: String,
    /// Whitespace between the value and its `;`.
    pub after: String,
}

impl Default for DeclarationRaws {
    fn default() -> Self {
        Self {
            before: String::new(),
            between: ": ".to_string(),
            after: String::new(),
        }
    }
}

/// A `property: value` pair inside a rule.
///
/// The value is kept as raw text; interpreting it is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub raws: DeclarationRaws,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            raws: DeclarationRaws::default(),
        }
    }

    /// Returns a new declaration that shares this declaration's raws.
    pub fn clone_with(&self, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            raws: self.raws.clone(),
        }
    }
}

/// A `/* ... */` comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Comment body without the delimiters.
    pub text: String,
    pub before: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            before: String::new(),
        }
    }
}

/// Anything that can appear between a rule's braces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleItem {
    Declaration(Declaration),
    Comment(Comment),
}

impl RuleItem {
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            RuleItem::Declaration(decl) => Some(decl),
            RuleItem::Comment(_) => None,
        }
    }

    pub fn as_declaration_mut(&mut self) -> Option<&mut Declaration> {
        match self {
            RuleItem::Declaration(decl) => Some(decl),
            RuleItem::Comment(_) => None,
        }
    }

    pub fn into_declaration(self) -> Option<Declaration> {
        match self {
            RuleItem::Declaration(decl) => Some(decl),
            RuleItem::Comment(_) => None,
        }
    }
}

/// Whitespace recorded around a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleRaws {
    /// Text before the selector.
    pub before: String,
    /// Text between the selector and `{`.
    pub between: String,
    /// Text between the last item and `}`.
    pub after: String,
    /// Whether the last declaration is followed by `;`.
    pub semicolon: bool,
}

impl Default for RuleRaws {
    fn default() -> Self {
        Self {
            before: String::new(),
            between: " ".to_string(),
            after: String::new(),
            semicolon: true,
        }
    }
}

/// A style rule: a selector and an ordered list of items.
///
/// Items are addressed by index. Every edit operation takes and returns
/// positions in `items`, so callers re-derive positions after each edit
/// instead of holding references into the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub items: Vec<RuleItem>,
    pub raws: RuleRaws,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            items: Vec::new(),
            raws: RuleRaws::default(),
        }
    }

    /// Appends a declaration; convenient for building rules in code.
    pub fn with_declaration(mut self, property: &str, value: &str) -> Self {
        self.items
            .push(RuleItem::Declaration(Declaration::new(property, value)));
        self
    }

    /// Declarations in order, skipping comments.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.items.iter().filter_map(RuleItem::as_declaration)
    }

    /// Positions of every declaration named `property`, in document order.
    pub fn positions_of(&self, property: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.as_declaration()
                    .is_some_and(|decl| decl.property == property)
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Position of the first declaration named `property`.
    pub fn position_of(&self, property: &str) -> Option<usize> {
        self.items.iter().position(|item| {
            item.as_declaration()
                .is_some_and(|decl| decl.property == property)
        })
    }

    pub fn has_declaration(&self, property: &str) -> bool {
        self.position_of(property).is_some()
    }

    pub fn declaration(&self, index: usize) -> Option<&Declaration> {
        self.items.get(index).and_then(RuleItem::as_declaration)
    }

    pub fn declaration_mut(&mut self, index: usize) -> Option<&mut Declaration> {
        self.items
            .get_mut(index)
            .and_then(RuleItem::as_declaration_mut)
    }

    /// Inserts `decl` immediately before the item at `index` and returns the
    /// new position of that item.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.items.len()`.
    pub fn insert_before(&mut self, index: usize, decl: Declaration) -> usize {
        self.items.insert(index, RuleItem::Declaration(decl));
        index + 1
    }

    /// Inserts a declaration that copies the raws of the declaration at
    /// `index`, placing it immediately before it. Returns the new position of
    /// the reference declaration.
    ///
    /// Falls back to default raws when `index` does not hold a declaration.
    pub fn clone_before(&mut self, index: usize, property: &str, value: &str) -> usize {
        let decl = match self.declaration(index) {
            Some(reference) => reference.clone_with(property, value),
            None => Declaration::new(property, value),
        };
        self.insert_before(index, decl)
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> RuleItem {
        self.items.remove(index)
    }

    /// Index of the last declaration, used by the writer to decide where the
    /// optional trailing semicolon goes.
    pub(crate) fn last_declaration_index(&self) -> Option<usize> {
        self.items
            .iter()
            .rposition(|item| matches!(item, RuleItem::Declaration(_)))
    }
}

/// A top-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    Comment(Comment),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub nodes: Vec<Node>,
    /// Text after the last node.
    pub after: String,
}

impl StyleSheet {
    /// Style rules in document order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Rule(rule) => Some(rule),
            Node::Comment(_) => None,
        })
    }

    /// Mutable style rules in document order.
    pub fn rules_mut(&mut self) -> impl Iterator<Item = &mut Rule> {
        self.nodes.iter_mut().filter_map(|node| match node {
            Node::Rule(rule) => Some(rule),
            Node::Comment(_) => None,
        })
    }

    /// Serializes the stylesheet back to CSS text.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}
