//! Product card fragments.

use scout_core::ResultRecord;

use crate::escape::escape_html;
use crate::format::{format_count, format_price};

/// Action bindings a rendered card exposes to the surface.
///
/// The surface wires these to its own buy/feedback handlers; the renderer
/// itself never navigates.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBindings {
    /// Identifier handed back on buy and feedback actions.
    pub item_id: u64,
    /// Navigation target for "View & Buy", when the record has one.
    pub buy_link: Option<String>,
}

/// A rendered card plus its action bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFragment {
    pub html: String,
    pub bindings: CardBindings,
}

/// Render one result record as a product card.
pub fn render_card(record: &ResultRecord) -> CardFragment {
    let source = record
        .source
        .as_deref()
        .map(|s| {
            format!(
                "\n        <p class=\"product-source\">from {}</p>",
                escape_html(s)
            )
        })
        .unwrap_or_default();

    let rating = match record.rating {
        Some(rating) => {
            let count = record
                .reviews
                .map(|reviews| {
                    format!(
                        r#" <span class="rating-count">({})</span>"#,
                        format_count(reviews)
                    )
                })
                .unwrap_or_default();
            format!(
                "\n    <div class=\"product-rating\">\n        <span class=\"rating-value\">&#9733; {rating}</span>{count}\n    </div>"
            )
        }
        None => String::new(),
    };

    let mut price = format!(
        r#"<span class="price-current">{}</span>"#,
        format_price(record.price)
    );
    if record.has_discount() {
        if let Some(original) = record.original_price {
            price.push_str(&format!(
                r#" <span class="price-original">{}</span>"#,
                format_price(original)
            ));
        }
        // Advertised discount is shown verbatim, never recomputed from the
        // price delta.
        if let Some(discount) = record.discount {
            price.push_str(&format!(
                r#" <span class="price-discount">-{discount}%</span>"#
            ));
        }
    }

    let shipping = record
        .shipping
        .as_deref()
        .map(|s| {
            format!(
                "\n    <div class=\"product-info\">\n        <div class=\"info-item\">&#128666; {}</div>\n    </div>",
                escape_html(s)
            )
        })
        .unwrap_or_default();

    let trending = if record.trending {
        "\n    <div class=\"trending-badge\">&#128200; Trending</div>".to_string()
    } else {
        String::new()
    };

    let html = format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-header">
        <h3 class="product-name">{name}</h3>
        <p class="product-brand">{brand}</p>{source}
    </div>{rating}
    <div class="product-price">
        {price}
    </div>{shipping}{trending}
    <div class="product-actions">
        <button class="btn btn-primary" data-action="buy" data-product-id="{id}">View &amp; Buy</button>
        <button class="btn btn-icon" data-action="feedback" data-product-id="{id}" title="Not what you meant?">&#128172;</button>
    </div>
</article>"#,
        id = record.id,
        name = escape_html(&record.name),
        brand = escape_html(&record.brand),
        source = source,
        rating = rating,
        price = price,
        shipping = shipping,
        trending = trending,
    );

    CardFragment {
        html,
        bindings: CardBindings {
            item_id: record.id,
            buy_link: record.purchase_url().map(str::to_owned),
        },
    }
}

/// Render a ranked result set, preserving input order.
pub fn render_results(records: &[ResultRecord]) -> Vec<CardFragment> {
    records.iter().map(render_card).collect()
}

/// Concatenate rendered cards into the results grid fragment.
pub fn render_grid(cards: &[CardFragment]) -> String {
    let inner: String = cards.iter().map(|card| card.html.as_str()).collect();
    format!(
        "<section class=\"results-grid\" data-section=\"results\">\n{inner}\n</section>"
    )
}
