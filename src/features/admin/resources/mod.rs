//! Per-entity [`AdminResource`](crate::features::admin::scaffold::AdminResource)
//! bindings, registered in menu order by `main`.

pub mod admin_user;
pub mod banner;
pub mod brand;
pub mod category;
pub mod certificate;
pub mod company;
pub mod contact_message;
pub mod news;
pub mod product;
pub mod subscriber;

pub use admin_user::AdminUserAdmin;
pub use banner::BannerAdmin;
pub use brand::BrandAdmin;
pub use category::CategoryAdmin;
pub use certificate::CertificateAdmin;
pub use company::CompanyAdmin;
pub use contact_message::ContactMessageAdmin;
pub use news::NewsAdmin;
pub use product::ProductAdmin;
pub use subscriber::SubscriberAdmin;
