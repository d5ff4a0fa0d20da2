//! Full HTML document assembly for the static endpoint.
//!
//! Wraps a composed body in a complete, self-contained document: doctype,
//! head with escaped SEO metadata, and the critical CSS inlined so the page
//! paints with zero additional round trips. No script tags and no client
//! framework anywhere in the output.

use sitelet_compose::ComposedPage;
use sitelet_render::{Node, escape_html};

/// Inline stylesheet covering every class the composer and block renderer
/// emit. Kept small enough to inline on every response.
const CRITICAL_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;color:#0f172a;background:#ffffff;line-height:1.6}\
a{text-decoration:none;color:inherit}\
img{max-width:100%;display:block}\
.site-header{display:flex;align-items:center;justify-content:space-between;padding:1rem 2rem;border-bottom:1px solid #e2e8f0}\
.site-name{font-weight:700;font-size:1.25rem}\
.site-nav{display:flex;gap:1.5rem}\
.nav-link{color:#475569;font-weight:500}\
.nav-link.active{font-weight:700}\
main{min-height:60vh}\
.block{padding:4rem 2rem}\
.block-hero{color:#ffffff;position:relative;overflow:hidden}\
.hero-overlay{position:absolute;inset:0;z-index:1}\
.hero-inner{position:relative;z-index:2;max-width:48rem;margin:0 auto}\
.hero-headline{font-size:2.5rem;font-weight:800;margin-bottom:1rem}\
.hero-subheadline{font-size:1.25rem;opacity:.9;margin-bottom:2rem}\
.hero-cta{display:inline-block;padding:.75rem 2rem;border-radius:.5rem;color:#ffffff;font-weight:600}\
.block-text .prose{max-width:44rem;margin:0 auto}\
.image-figure{max-width:56rem;margin:0 auto}\
.image-figure figcaption{text-align:center;color:#64748b;font-size:.875rem;margin-top:.5rem}\
.stats-headline{text-align:center;font-size:2rem;margin-bottom:2.5rem}\
.stats-grid{display:flex;flex-wrap:wrap;justify-content:center;gap:3rem;text-align:center}\
.stat{display:flex;flex-direction:column}\
.stat-value{font-size:2.25rem;font-weight:800}\
.stat-label{opacity:.85}\
.block-features{background:#f8fafc}\
.features-headline{text-align:center;font-size:2rem;margin-bottom:.5rem}\
.features-subheadline{text-align:center;color:#64748b;margin-bottom:2.5rem}\
.features-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:2rem;max-width:64rem;margin:0 auto}\
.feature-card{background:#ffffff;border-radius:.75rem;padding:2rem;box-shadow:0 1px 3px rgba(15,23,42,.1)}\
.feature-icon{font-size:2rem;margin-bottom:1rem}\
.feature-title{font-size:1.125rem;font-weight:700;margin-bottom:.5rem}\
.feature-description{color:#475569}\
.testimonial-card{text-align:center;max-width:44rem;margin:0 auto}\
.testimonial-quote{font-size:1.375rem;font-style:italic;margin-bottom:1.5rem}\
.testimonial-avatar{width:3.5rem;height:3.5rem;border-radius:50%;margin:0 auto .5rem}\
.testimonial-author{font-weight:700}\
.testimonial-role{color:#64748b;font-size:.875rem}\
.block-cta{text-align:center;color:#ffffff}\
.cta-headline{font-size:2rem;font-weight:800;margin-bottom:1rem}\
.cta-description{opacity:.9}\
.cta-button{display:inline-block;padding:.75rem 2rem;border-radius:.5rem;background:#ffffff;font-weight:600;margin-top:1.5rem}\
.block-form{max-width:32rem;margin:0 auto}\
.form-headline{text-align:center;font-size:1.75rem;margin-bottom:.5rem}\
.form-description{text-align:center;color:#64748b;margin-bottom:2rem}\
.form-field{margin-bottom:1.25rem}\
.form-field label{display:block;font-weight:600;margin-bottom:.375rem}\
.form-field input,.form-field textarea{width:100%;padding:.625rem;border:1px solid #cbd5e1;border-radius:.375rem;font:inherit}\
.form-submit{width:100%;padding:.75rem;border:0;border-radius:.5rem;color:#ffffff;font-weight:600;font-size:1rem}\
.pricing-headline{text-align:center;font-size:2rem;margin-bottom:.5rem}\
.pricing-subheadline{text-align:center;color:#64748b;margin-bottom:2.5rem}\
.pricing-grid{display:flex;flex-wrap:wrap;justify-content:center;gap:2rem}\
.plan-card{background:#ffffff;border:1px solid #e2e8f0;border-radius:.75rem;padding:2rem;width:18rem;position:relative}\
.plan-highlighted{box-shadow:0 4px 12px rgba(15,23,42,.15)}\
.plan-badge{position:absolute;top:-.75rem;left:50%;transform:translateX(-50%);color:#ffffff;font-size:.75rem;font-weight:700;padding:.25rem .75rem;border-radius:9999px}\
.plan-name{font-size:1.125rem;font-weight:700}\
.plan-price{font-size:2rem;font-weight:800;margin:.75rem 0}\
.plan-period{font-size:1rem;font-weight:400;color:#64748b}\
.plan-features{list-style:none;margin:1rem 0}\
.plan-features li{padding:.375rem 0;color:#475569}\
.plan-check{margin-right:.5rem}\
.plan-cta{display:block;text-align:center;padding:.625rem;border-radius:.5rem;color:#ffffff;font-weight:600}\
.video-headline{text-align:center;font-size:2rem;margin-bottom:.5rem}\
.video-description{text-align:center;color:#64748b;margin-bottom:2rem}\
.video-frame{max-width:56rem;margin:0 auto;aspect-ratio:16/9}\
.video-frame iframe{width:100%;height:100%;border:0}\
.video-thumb{max-width:56rem;margin:0 auto;position:relative}\
.video-play{position:absolute;inset:0;display:flex;align-items:center;justify-content:center;font-size:3rem;color:#ffffff}\
.gallery-headline{text-align:center;font-size:2rem;margin-bottom:2.5rem}\
.gallery-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(14rem,1fr));gap:1rem;max-width:64rem;margin:0 auto}\
.gallery-image{border-radius:.5rem;width:100%;height:12rem;object-fit:cover}\
.block-products{background:#f8fafc}\
.products-headline{text-align:center;font-size:2rem;margin-bottom:2.5rem}\
.products-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:2rem;max-width:64rem;margin:0 auto}\
.product-card{background:#ffffff;border-radius:.75rem;overflow:hidden;box-shadow:0 1px 3px rgba(15,23,42,.1)}\
.product-placeholder{height:10rem;display:flex;align-items:center;justify-content:center;font-size:3rem;background:#f1f5f9}\
.product-thumb{height:10rem;width:100%;object-fit:cover}\
.product-title{padding:1rem 1rem 0}\
.product-description{padding:.5rem 1rem;color:#475569;font-size:.9rem}\
.product-price{padding:0 1rem 1rem;font-weight:700;font-size:1.125rem}\
.not-found{display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center;padding:6rem 2rem;gap:1rem}\
.not-found-home{display:inline-block;padding:.75rem 2rem;border-radius:.5rem;color:#ffffff;font-weight:600}\
.site-footer{border-top:1px solid #e2e8f0;padding:2rem;text-align:center}\
.footer-nav{display:flex;justify-content:center;gap:1.5rem;margin-bottom:1rem}\
.footer-link{color:#475569;font-size:.9rem}\
.footer-copyright{color:#94a3b8;font-size:.875rem}";

/// Serialize a composed page into a complete HTML document.
#[must_use]
pub(crate) fn render_document(composed: &ComposedPage) -> String {
    let body: String = composed.body.iter().map(Node::html).collect();

    let mut doc = String::with_capacity(CRITICAL_CSS.len() + body.len() + 512);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"utf-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    doc.push_str(&format!("<title>{}</title>\n", escape_html(&composed.seo_title)));
    if !composed.seo_description.is_empty() {
        doc.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(&composed.seo_description)
        ));
    }
    doc.push_str(&format!("<style>{CRITICAL_CSS}</style>\n"));
    doc.push_str("</head>\n<body>\n");
    doc.push_str(&body);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

/// Minimal document returned when no site resolves for the host.
pub(crate) fn site_not_found_document() -> String {
    plain_document(
        "Site Not Found",
        "No site is configured for this domain.",
    )
}

/// Minimal document returned on upstream failure or timeout.
///
/// Carries no tenant theming: when we get here we may know nothing about
/// the site at all.
pub(crate) fn failure_document() -> String {
    plain_document(
        "Something Went Wrong",
        "This page is temporarily unavailable. Please try again in a moment.",
    )
}

fn plain_document(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>body{{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
         display:flex;flex-direction:column;align-items:center;justify-content:center;\
         min-height:100vh;color:#0f172a;background:#f8fafc;gap:.75rem}}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n<p>{message}</p>\n</body>\n</html>\n"
    )
}
