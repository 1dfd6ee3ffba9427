//! Client-side staging area for a soil-testing entry that has not been
//! submitted yet.
//!
//! Edits are positional, matching how the form addresses its rows. Each row
//! also carries a local key that never changes while the row exists, so a
//! renderer can key rows by identity instead of by position.

use crate::requests::CreateSoilRequest;

/// One staged description row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDescription {
    pub key: u64,
    pub text: String,
}

/// The record being composed in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoilDraft {
    pub name: String,
    descriptions: Vec<DraftDescription>,
    next_key: u64,
}

impl SoilDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn descriptions(&self) -> &[DraftDescription] {
        &self.descriptions
    }

    /// Appends an empty description row. There is no upper bound.
    pub fn add_description(&mut self) {
        let key = self.next_key;
        self.next_key += 1;
        self.descriptions.push(DraftDescription {
            key,
            text: String::new(),
        });
    }

    /// Replaces the text at `index`. Indices past the end are ignored.
    pub fn update_description(&mut self, index: usize, value: impl Into<String>) {
        if let Some(entry) = self.descriptions.get_mut(index) {
            entry.text = value.into();
        }
    }

    /// Removes the row at `index`, shifting later rows down by one.
    /// Indices past the end are ignored.
    pub fn remove_description(&mut self, index: usize) {
        if index < self.descriptions.len() {
            self.descriptions.remove(index);
        }
    }

    /// Snapshot of the draft as it is sent to the server. No validation is
    /// applied here; a blank name or an empty list is sent as is.
    pub fn to_request(&self) -> CreateSoilRequest {
        CreateSoilRequest {
            name: self.name.clone(),
            descriptions: self.descriptions.iter().map(|d| d.text.clone()).collect(),
        }
    }

    /// Discards the staged name and rows. Keys keep increasing so a row key is
    /// never reused within one form instance.
    pub fn clear(&mut self) {
        self.name.clear();
        self.descriptions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn texts(draft: &SoilDraft) -> Vec<String> {
        draft.descriptions().iter().map(|d| d.text.clone()).collect()
    }

    #[test]
    fn add_appends_empty_row() {
        let mut draft = SoilDraft::new();
        draft.add_description();
        draft.add_description();
        assert_eq!(texts(&draft), vec!["", ""]);
    }

    #[test]
    fn remove_shifts_following_rows() {
        let mut draft = SoilDraft::new();
        for value in ["a", "b", "c"] {
            draft.add_description();
            let last = draft.descriptions().len() - 1;
            draft.update_description(last, value);
        }
        let key_of_c = draft.descriptions()[2].key;

        draft.remove_description(1);

        assert_eq!(texts(&draft), vec!["a", "c"]);
        assert_eq!(draft.descriptions()[1].key, key_of_c);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut draft = SoilDraft::new();
        draft.add_description();
        draft.update_description(5, "x");
        draft.remove_description(5);
        assert_eq!(texts(&draft), vec![""]);
    }

    #[test]
    fn clear_resets_but_never_reuses_keys() {
        let mut draft = SoilDraft::new();
        draft.set_name("चरण 1");
        draft.add_description();
        let first_key = draft.descriptions()[0].key;

        draft.clear();
        assert_eq!(draft.name, "");
        assert!(draft.descriptions().is_empty());

        draft.add_description();
        assert_ne!(draft.descriptions()[0].key, first_key);
    }

    #[test]
    fn request_keeps_order_and_blank_values() {
        let mut draft = SoilDraft::new();
        draft.add_description();
        draft.add_description();
        draft.update_description(1, "second");
        assert_eq!(
            draft.to_request(),
            CreateSoilRequest {
                name: String::new(),
                descriptions: vec![String::new(), "second".to_string()],
            }
        );
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Add,
        Update(usize, String),
        Remove(usize),
    }

    fn edit() -> impl Strategy<Value = Edit> {
        prop_oneof![
            Just(Edit::Add),
            (0usize..8, "[a-z]{0,4}").prop_map(|(i, s)| Edit::Update(i, s)),
            (0usize..8).prop_map(Edit::Remove),
        ]
    }

    proptest! {
        #[test]
        fn draft_tracks_a_plain_vec_model(edits in proptest::collection::vec(edit(), 0..40)) {
            let mut draft = SoilDraft::new();
            let mut model: Vec<String> = Vec::new();
            let mut adds = 0usize;
            let mut removes = 0usize;

            for e in edits {
                match e {
                    Edit::Add => {
                        draft.add_description();
                        model.push(String::new());
                        adds += 1;
                    }
                    Edit::Update(i, s) => {
                        if i < model.len() {
                            model[i] = s.clone();
                        }
                        draft.update_description(i, s);
                    }
                    Edit::Remove(i) => {
                        if i < model.len() {
                            model.remove(i);
                            removes += 1;
                        }
                        draft.remove_description(i);
                    }
                }
            }

            prop_assert_eq!(draft.descriptions().len(), adds - removes);
            prop_assert_eq!(texts(&draft), model);
        }
    }
}
