pub(crate) mod notes;
