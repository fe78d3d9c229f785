use crate::contact::draft::ContactDraft;

pub const WHATSAPP_HOST: &str = "wa.me";

/// Keeps only ASCII digits, so `+971 50-448 6615` becomes `971504486615`.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// URL-component encoding: only `A-Za-z0-9-_.~` survive unescaped.
pub fn encode_message(message: &str) -> String {
    urlencoding::encode(message).into_owned()
}

pub fn build_whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        WHATSAPP_HOST,
        normalize_phone(phone),
        encode_message(message)
    )
}

pub fn greeting(brand: &str) -> String {
    format!("Hello {}, I want a personalized branding website.", brand)
}

/// The text the studio receives. Line order and labels are what the recipient reads.
pub fn compose_message(brand: &str, draft: &ContactDraft) -> String {
    format!(
        "{}\nName: {}\nContact: {}\nMessage: {}",
        greeting(brand),
        draft.name,
        draft.contact,
        draft.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_digits_in_order() {
        assert_eq!(normalize_phone("+971 50-448 6615"), "971504486615");
        assert_eq!(normalize_phone("(020) 7946-0018 ext. 2"), "020794600182");
        assert_eq!(normalize_phone("+"), "");
        assert_eq!(normalize_phone("٣٤٥"), "");
    }

    #[test]
    fn encoded_message_decodes_back() {
        for text in [
            "Hello\nName: A&B",
            "100% sure? yes=no #hash /path",
            "مرحبا 👋 café",
            "",
        ] {
            let encoded = encode_message(text);
            assert!(!encoded.contains(' '));
            assert!(!encoded.contains('\n'));
            assert_eq!(urlencoding::decode(&encoded).unwrap(), text);
        }
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_message("a b\nc&d=e?f"), "a%20b%0Ac%26d%3De%3Ff");
    }

    #[test]
    fn builds_prefilled_link_end_to_end() {
        let draft = ContactDraft {
            name: "Sam".to_string(),
            contact: "sam@x.com".to_string(),
            message: "Build me a site".to_string(),
        };
        let message = compose_message("Brand", &draft);
        assert_eq!(
            message,
            "Hello Brand, I want a personalized branding website.\nName: Sam\nContact: sam@x.com\nMessage: Build me a site"
        );

        assert_eq!(
            build_whatsapp_link("+971504486615", &message),
            "https://wa.me/971504486615?text=\
             Hello%20Brand%2C%20I%20want%20a%20personalized%20branding%20website.\
             %0AName%3A%20Sam\
             %0AContact%3A%20sam%40x.com\
             %0AMessage%3A%20Build%20me%20a%20site"
        );
    }

    #[test]
    fn malformed_phone_still_builds_a_link() {
        assert_eq!(build_whatsapp_link("n/a", "hi"), "https://wa.me/?text=hi");
    }
}
