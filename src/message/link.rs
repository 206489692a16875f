use urlencoding::encode;

/// WhatsApp click-to-chat link that opens a chat with `recipient` and the
/// message pre-filled.
pub fn whatsapp_link(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", recipient, encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_percent_encodes_message() {
        let link = whatsapp_link("971509674475", "*Name:* Asha & Co\nPax: 50");
        assert_eq!(
            link,
            "https://wa.me/971509674475?text=%2AName%3A%2A%20Asha%20%26%20Co%0APax%3A%2050"
        );
    }
}
