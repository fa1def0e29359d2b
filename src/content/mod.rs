//! Content module - handles posts, their front-matter and bodies

mod frontmatter;
pub mod loader;
pub mod markup;
mod post;
mod repository;

pub use frontmatter::{parse_published_at, FrontMatter, FrontMatterError};
pub use loader::{ContentLoader, LoadPolicy};
pub use markup::{MarkupRenderer, Node};
pub use post::{time_to_read, Post, PostMetadata};
pub use repository::PostRepository;
