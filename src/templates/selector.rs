//! Deterministic, category-aware template choice.
//!
//! The variant is a pure function of the task title: the sum of its UTF-16
//! code units modulo the bucket size. Plans generated earlier were stored
//! with templates picked this way, so the arithmetic must not change.

use crate::domain::{Category, TemplateKind};
use crate::templates::catalog::{TemplateVariant, category_variants, generic_variants};

/// Which bucket a (kind, category) pair resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub variants: &'static [TemplateVariant],
    /// Generic variants greet the primary channel before the body
    pub greets: bool,
}

impl Bucket {
    const EMPTY: Bucket = Bucket {
        variants: &[],
        greets: false,
    };
}

/// Index of the variant a title maps to in a bucket of `count` variants
pub fn variant_index(title: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let sum: u64 = title.encode_utf16().map(u64::from).sum();
    (sum % count as u64) as usize
}

/// Picks literal template variants for one campaign's category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateSelector {
    category: Option<Category>,
}

impl TemplateSelector {
    pub fn new(category: Option<Category>) -> Self {
        Self { category }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Resolve the bucket for `kind`.
    ///
    /// Category-specific variants win; otherwise the generic bucket is used.
    /// Skincare never gets an AMA, and education AMAs never fall back to the
    /// generic bucket.
    pub fn bucket(&self, kind: TemplateKind) -> Bucket {
        match (kind, self.category) {
            (TemplateKind::Ama, Some(Category::Skincare)) => Bucket::EMPTY,
            (TemplateKind::Ama, Some(Category::Education)) => Bucket {
                variants: category_variants(kind, Category::Education),
                greets: false,
            },
            (_, Some(category)) if !category_variants(kind, category).is_empty() => Bucket {
                variants: category_variants(kind, category),
                greets: false,
            },
            _ => Bucket {
                variants: generic_variants(kind),
                greets: true,
            },
        }
    }

    /// Whether any template exists for `kind` under this category
    pub fn supports(&self, kind: TemplateKind) -> bool {
        !self.bucket(kind).variants.is_empty()
    }

    /// The variant a task titled `title` receives
    pub fn select(&self, kind: TemplateKind, title: &str) -> Option<&'static TemplateVariant> {
        let bucket = self.bucket(kind);
        bucket.variants.get(variant_index(title, bucket.variants.len()))
    }

    /// Render the chosen variant as post text.
    ///
    /// `greeting` is the display name of the primary channel (e.g. `r/rust`);
    /// `None` greets "everyone".
    pub fn render(&self, kind: TemplateKind, title: &str, greeting: Option<&str>) -> Option<String> {
        let bucket = self.bucket(kind);
        let chosen = bucket.variants.get(variant_index(title, bucket.variants.len()))?;

        let header = if bucket.greets {
            format!("Hi {},\n\n", greeting.filter(|g| !g.is_empty()).unwrap_or("everyone"))
        } else {
            String::new()
        };

        let text = if chosen.title.is_empty() {
            format!("{}{}", header, chosen.body)
        } else {
            format!("{}\n\n{}{}", chosen.title, header, chosen.body)
        };

        if text.trim().is_empty() { None } else { Some(text) }
    }
}
