//! Site configuration.

mod site;

pub use site::{
    AuthorInfo, BlogPagination, ContactInfo, SeoSettings, SiteConfig, SocialLink, SocialProfiles,
    DEFAULT_WHATSAPP_MESSAGE,
};
