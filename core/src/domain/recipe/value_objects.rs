use url::form_urlencoded;

use crate::domain::ingredient::form::{CHECKED_FIELD, OTHER_FIELD};

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipesInput {
    /// Urlencoded snapshot of the selection form. `None` when the field was not submitted.
    pub form_data: Option<String>,
}

/// Ingredient selection decoded from a form snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub checked: Vec<String>,
    pub other: Vec<String>,
}

impl Submission {
    /// Parses `ingredients[]=..&other_ingredients[]=..` with form-array semantics:
    /// `key[]` appends, `key[n]` sets slot `n` (first insertion fixes its position),
    /// and a bare `key=value` replaces the list with that single value.
    pub fn from_form_data(form_data: &str) -> Self {
        let pairs: Vec<(String, String)> = form_urlencoded::parse(form_data.as_bytes())
            .into_owned()
            .collect();

        Self {
            checked: collect_array_field(&pairs, CHECKED_FIELD),
            other: collect_array_field(&pairs, OTHER_FIELD),
        }
    }

    /// Checked values followed by free-text values. Blank entries are dropped,
    /// kept entries are returned untouched.
    pub fn ingredients(&self) -> Vec<String> {
        self.checked
            .iter()
            .chain(self.other.iter())
            .filter(|ingredient| !ingredient.trim().is_empty())
            .cloned()
            .collect()
    }
}

fn collect_array_field(pairs: &[(String, String)], field: &str) -> Vec<String> {
    let mut slots: Vec<(Option<&str>, &str)> = Vec::new();

    for (key, value) in pairs {
        let Some(rest) = key.strip_prefix(field) else {
            continue;
        };

        if rest.is_empty() {
            slots = vec![(None, value.as_str())];
            continue;
        }

        let Some(index) = rest
            .strip_prefix('[')
            .and_then(|rest| rest.split_once(']'))
            .map(|(index, _)| index)
        else {
            continue;
        };

        if index.is_empty() {
            slots.push((None, value.as_str()));
        } else if let Some(slot) = slots.iter_mut().find(|(key, _)| *key == Some(index)) {
            slot.1 = value.as_str();
        } else {
            slots.push((Some(index), value.as_str()));
        }
    }

    slots.into_iter().map(|(_, value)| value.to_string()).collect()
}
