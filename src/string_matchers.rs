//! Sub-matchers over `str`, used to check formatted messages.

use std::fmt;

use crate::{Description, Matcher, SelfDescribing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Containing,
    StartingWith,
    EndingWith,
    EqualTo,
}

/// Compares a string against a fixed operand.
///
/// Created by [`contains_string`], [`starts_with`], [`ends_with`] and
/// [`equal_to`].
#[derive(Clone, PartialEq, Eq)]
pub struct StringMatcher {
    operand: String,
    relation: Relation,
}

impl fmt::Debug for StringMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringMatcher")
            .field("relation", &self.relation)
            .field("operand", &self.operand)
            .finish()
    }
}

/// Matches strings containing `substring`.
pub fn contains_string(substring: impl Into<String>) -> StringMatcher {
    StringMatcher::new(substring, Relation::Containing)
}

pub fn starts_with(prefix: impl Into<String>) -> StringMatcher {
    StringMatcher::new(prefix, Relation::StartingWith)
}

pub fn ends_with(suffix: impl Into<String>) -> StringMatcher {
    StringMatcher::new(suffix, Relation::EndingWith)
}

/// Matches strings equal to `expected`.
pub fn equal_to(expected: impl Into<String>) -> StringMatcher {
    StringMatcher::new(expected, Relation::EqualTo)
}

impl StringMatcher {
    fn new(operand: impl Into<String>, relation: Relation) -> Self {
        Self {
            operand: operand.into(),
            relation,
        }
    }
}

impl SelfDescribing for StringMatcher {
    fn describe_to(&self, description: &mut Description) {
        let relationship = match self.relation {
            Relation::Containing => "containing",
            Relation::StartingWith => "starting with",
            Relation::EndingWith => "ending with",
            Relation::EqualTo => {
                description.append_value(self.operand.as_str());
                return;
            }
        };
        description
            .append_text("a string ")
            .append_text(relationship)
            .append_text(" ")
            .append_value(self.operand.as_str());
    }
}

impl Matcher<str> for StringMatcher {
    fn matches(&self, item: &str) -> bool {
        let operand = self.operand.as_str();
        match self.relation {
            Relation::Containing => item.contains(operand),
            Relation::StartingWith => item.starts_with(operand),
            Relation::EndingWith => item.ends_with(operand),
            Relation::EqualTo => item == operand,
        }
    }

    fn describe_mismatch(&self, item: &str, description: &mut Description) {
        description.append_text("was ").append_value(item);
    }
}
