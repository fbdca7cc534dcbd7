use web_sys::{Document, HtmlInputElement};

pub const NO_FILE_CHOSEN: &str = "No file chosen";

/// Text for a custom file input's label given the first selected file's name.
pub fn filename_label(first_file: Option<&str>) -> &str {
    first_file.unwrap_or(NO_FILE_CHOSEN)
}

/// Mirror `input`'s selection into the element with id `label_id`.
/// Does nothing when the label isn't on the page.
pub fn show_filename(document: &Document, input: &HtmlInputElement, label_id: &str) {
    let Some(label) = document.get_element_by_id(label_id) else {
        tracing::debug!(label_id, "filename label not found");
        return;
    };
    let name = input.files().and_then(|files| files.get(0)).map(|file| file.name());
    label.set_text_content(Some(filename_label(name.as_deref())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_file_name() {
        assert_eq!(filename_label(Some("beach.png")), "beach.png");
    }

    #[test]
    fn falls_back_when_nothing_chosen() {
        assert_eq!(filename_label(None), "No file chosen");
    }

    #[test]
    fn empty_name_is_kept() {
        assert_eq!(filename_label(Some("")), "");
    }
}
