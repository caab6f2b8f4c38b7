use crate::base;

/// Headed groups of `label ---- value` lines. Values are right-aligned across
/// every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl Section {
    pub fn new<S>(title: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row<L, V>(mut self, label: L, value: V) -> Self
    where
        L: Into<String>,
        V: std::fmt::Display,
    {
        self.rows.push((label.into(), value.to_string()));
        self
    }
}

fn char_count((label, value): &(String, String)) -> usize {
    label.chars().count()
        + base::util::BOUNDING_SPACES_COUNT
        + base::util::MIN_DASHES_COUNT
        + value.chars().count()
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.rows.is_empty())
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let alignment_charlen = self
            .sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(char_count)
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        for section in self.sections.iter().filter(|s| !s.rows.is_empty()) {
            let mut node = base::tree::Node::new(section.title.clone().into());
            for (label, value) in section.rows.iter() {
                let data = self.leaf_data(label, value, alignment_charlen);
                node.children.push(base::tree::Node::new(data.into()));
            }
            root.children.push(node);
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn leaf_data(&self, label: &str, value: &str, alignment_charlen: usize) -> String {
        let label_charlen = label.chars().count();
        let value_charlen = value.chars().count();
        let dash_count =
            alignment_charlen - label_charlen - base::util::BOUNDING_SPACES_COUNT - value_charlen;
        let mut s = String::with_capacity(alignment_charlen);
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(value);
        s
    }
}
