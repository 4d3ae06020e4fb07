//! GPT-2 Medi showcase.

use crate::domain::foundation::Page;

use super::blocks::{Block, PageView};

pub const HOW_IT_WORKS_IMAGE: &str = "Gpt2-Medi.png";
pub const SAMPLE_OUTPUT_IMAGE: &str = "Output.png";

/// URL prefix the HTTP layer serves image assets under.
pub const IMAGE_ROUTE: &str = "/assets/images";

const CAPTION: &str = "Centered Image";

/// Builds the page; `available` reports whether an image file exists.
pub fn build<F>(available: F) -> PageView
where
    F: Fn(&str) -> bool,
{
    let image = |name: &str| Block::Image {
        src: format!("{}/{}", IMAGE_ROUTE, name),
        caption: CAPTION.to_string(),
        available: available(name),
    };

    let mut view = PageView::new(Page::AiUseCases);
    view.push(Block::subheader(
        "GPT-2 Medi: AI-Powered Healthcare Assistant",
    ))
    .push(Block::markdown(
        "GPT-2 Medi is an AI-powered healthcare assistant designed for doctors to get information on any disease instantly.",
    ))
    .push(Block::subheader("How it Works"))
    .push(image(HOW_IT_WORKS_IMAGE))
    .push(Block::subheader("Sample Output"))
    .push(image(SAMPLE_OUTPUT_IMAGE));
    view
}
