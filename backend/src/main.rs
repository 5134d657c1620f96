use moon::*;
use shared::SiteContent;

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Incoming request debugging

macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

const FONTS_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Rubik:wght@700;800&display=swap";

async fn frontend() -> Frontend {
    let frontend = Frontend::new()
        .append_to_head(&format!(r#"<link rel="stylesheet" href="{FONTS_STYLESHEET}">"#))
        .append_to_head(r#"<link rel="icon" href="/_api/public/icons/sun.svg" type="image/svg+xml">"#);

    match SiteContent::embedded() {
        Ok(content) => frontend
            .title(&page_title(&content))
            .append_to_head(&description_meta(&content)),
        Err(error) => {
            eprintln!("BACKEND: site content is invalid: {error}");
            frontend.title("Portfolio")
        }
    }
}

fn page_title(content: &SiteContent) -> String {
    format!("{} | Portfolio", content.owner.name)
}

fn description_meta(content: &SiteContent) -> String {
    let description = content.owner.tagline.replace('"', "&quot;");
    format!(r#"<meta name="description" content="{description}">"#)
}

// The page is static; there are no up messages to answer.
async fn up_msg_handler(req: UpMsgRequest<()>) {
    debug_log!(
        DEBUG_BACKEND,
        "🔍 BACKEND: Ignoring up message from session {:?}",
        req.session_id
    );
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_uses_owner_name() {
        let content = SiteContent::embedded().expect("embedded content must be valid");
        assert_eq!(page_title(&content), "Mr Kups | Portfolio");
    }

    #[test]
    fn test_description_meta_escapes_quotes() {
        let mut content = SiteContent::embedded().expect("embedded content must be valid");
        content.owner.tagline = r#"Say "hi""#.to_string();
        assert_eq!(
            description_meta(&content),
            r#"<meta name="description" content="Say &quot;hi&quot;">"#
        );
    }
}
