#[cfg(test)]
mod tests {
    use alhuda_shared::draft::{
        clamp_message, whatsapp_url, ContactDraft, DEFAULT_ROLE, MESSAGE_LIMIT,
        MISSING_FIELDS_ERROR, ROLE_OPTIONS,
    };

    #[test]
    fn default_role_is_student() {
        let draft = ContactDraft::default();
        assert_eq!(draft.role, DEFAULT_ROLE);
        assert!(ROLE_OPTIONS.contains(&DEFAULT_ROLE));
    }

    #[test]
    fn preview_uses_placeholders_for_empty_fields() {
        let mut draft = ContactDraft::default();
        draft.role.clear();
        assert_eq!(
            draft.preview(),
            "Assalamu Alaikum, [Name] here ([Role]). [Message] Jazakumullahu Khairan."
        );
    }

    #[test]
    fn preview_substitutes_current_field_values() {
        let mut draft = ContactDraft::default();
        draft.name = "Ali".to_string();
        draft.set_message("Need help");
        assert_eq!(
            draft.preview(),
            "Assalamu Alaikum, Ali here (Student). Need help Jazakumullahu Khairan."
        );
    }

    #[test]
    fn set_message_truncates_at_the_limit() {
        let mut draft = ContactDraft::default();
        draft.set_message(&"x".repeat(MESSAGE_LIMIT + 120));
        assert_eq!(draft.message.chars().count(), MESSAGE_LIMIT);
        assert_eq!(draft.counter_label(), "500");

        draft.set_message("short");
        assert_eq!(draft.message, "short");
        assert_eq!(draft.counter_label(), "5");
    }

    #[test]
    fn clamp_counts_characters_not_bytes() {
        let long = "\u{0634}".repeat(MESSAGE_LIMIT + 3);
        let clamped = clamp_message(&long);
        assert_eq!(clamped.chars().count(), MESSAGE_LIMIT);
    }

    #[test]
    fn clamp_borrows_when_already_within_limit() {
        let exact = "y".repeat(MESSAGE_LIMIT);
        assert!(matches!(clamp_message(&exact), std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn counter_label_never_exceeds_500() {
        let mut draft = ContactDraft::default();
        for len in [0, 1, 499, 500, 501, 2000] {
            draft.set_message(&"a".repeat(len));
            let shown: usize = draft.counter_label().parse().expect("numeric counter");
            assert!(shown <= 500);
        }
    }

    #[test]
    fn validate_rejects_empty_name_or_message() {
        let mut draft = ContactDraft::default();
        assert_eq!(draft.validate(), Err(MISSING_FIELDS_ERROR));

        draft.name = "Ali".to_string();
        assert_eq!(draft.validate(), Err(MISSING_FIELDS_ERROR));

        draft.set_message("Need help");
        assert_eq!(draft.validate(), Ok(()));

        draft.name.clear();
        assert_eq!(draft.validate(), Err(MISSING_FIELDS_ERROR));
    }

    #[test]
    fn whatsapp_url_embeds_recipient_and_encoded_message() {
        let mut draft = ContactDraft::default();
        draft.name = "Ali".to_string();
        draft.set_message("Need help");

        let url = whatsapp_url("233548787551", &draft.compose());
        assert!(url.starts_with("https://wa.me/233548787551?text="));
        assert!(url.contains(
            "Assalamu%20Alaikum%2C%20Ali%20here%20%28Student%29.%20Need%20help%20Jazakumullahu%20Khairan."
        ));
        // Nothing past the scheme survives unencoded.
        let query = url.split_once("?text=").map(|(_, q)| q).unwrap_or_default();
        assert!(!query.contains(' '));
        assert!(!query.contains('('));
    }
}
