use utoipa::{Modify, OpenApi};

use crate::features::banners::{dtos as banners_dtos, handlers as banners_handlers};
use crate::features::brands::{dtos as brands_dtos, handlers as brands_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::certificates::{
    dtos as certificates_dtos, handlers as certificates_handlers,
};
use crate::features::companies::{dtos as companies_dtos, handlers as companies_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::features::newsletter::{dtos as newsletter_dtos, handlers as newsletter_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::{ErrorResponse, IdResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Companies (hand-specified projection pair)
        companies_handlers::list_companies,
        companies_handlers::get_company,
        companies_handlers::create_company,
        companies_handlers::update_company,
        companies_handlers::delete_company,
        // Certificates
        certificates_handlers::list_certificates,
        certificates_handlers::get_certificate,
        certificates_handlers::create_certificate,
        certificates_handlers::update_certificate,
        certificates_handlers::delete_certificate,
        // Brands
        brands_handlers::list_brands,
        brands_handlers::get_brand,
        brands_handlers::create_brand,
        brands_handlers::update_brand,
        brands_handlers::delete_brand,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::delete_product,
        // News
        news_handlers::list_news,
        news_handlers::get_news,
        news_handlers::create_news,
        news_handlers::update_news,
        news_handlers::delete_news,
        // Banners
        banners_handlers::list_banners,
        banners_handlers::get_banner,
        banners_handlers::create_banner,
        banners_handlers::update_banner,
        banners_handlers::delete_banner,
        // Lead capture (write-only)
        contact_handlers::create_contact_message,
        newsletter_handlers::create_newsletter_subscriber,
    ),
    components(
        schemas(
            IdResponse,
            MessageResponse,
            ErrorResponse,
            companies_dtos::CompanyListDto,
            companies_dtos::CompanyDetailDto,
            companies_dtos::CreateCompanyDto,
            companies_dtos::UpdateCompanyDto,
            certificates_dtos::CertificateResponseDto,
            certificates_dtos::CreateCertificateDto,
            certificates_dtos::UpdateCertificateDto,
            brands_dtos::BrandResponseDto,
            brands_dtos::CreateBrandDto,
            brands_dtos::UpdateBrandDto,
            categories_dtos::ProductCategoryResponseDto,
            categories_dtos::CreateProductCategoryDto,
            categories_dtos::UpdateProductCategoryDto,
            products_dtos::ProductResponseDto,
            products_dtos::CreateProductDto,
            products_dtos::UpdateProductDto,
            news_dtos::NewsResponseDto,
            news_dtos::CreateNewsDto,
            news_dtos::UpdateNewsDto,
            banners_dtos::BannerResponseDto,
            banners_dtos::CreateBannerDto,
            banners_dtos::UpdateBannerDto,
            contact_dtos::CreateContactMessageDto,
            contact_dtos::ContactMessageResponseDto,
            newsletter_dtos::CreateNewsletterSubscriberDto,
            newsletter_dtos::NewsletterSubscriberResponseDto,
        )
    ),
    tags(
        (name = "companies", description = "Company catalog roots"),
        (name = "certificates", description = "Company certificates"),
        (name = "brands", description = "Brands"),
        (name = "categories", description = "Product category tree"),
        (name = "products", description = "Products"),
        (name = "news", description = "News articles"),
        (name = "banners", description = "Promotional banners"),
        (name = "leads", description = "Write-only lead capture"),
    )
)]
pub struct ApiDoc;

/// Injects env-configured title/version/description into the document.
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
