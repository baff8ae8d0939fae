//! Filtering and locale-aware ordering of image file names.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};

use super::{IMAGE_EXTENSIONS, IMAGE_URL_PREFIX};
use crate::error::ListerError;

/// Returns true if the name ends in one of the accepted image extensions.
pub fn is_image_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Compares file names the way a person reads them.
///
/// Uses root-locale collation with numeric ordering, so `image2` sorts
/// before `image10`, `é` sits next to `e` and lowercase precedes uppercase
/// on case-only ties. Names the collator considers equal (`img007` and
/// `img7`) fall back to byte order to keep the result total.
pub struct NameOrder {
    collator: Collator,
}

impl NameOrder {
    pub fn new() -> Result<Self, ListerError> {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        options.numeric = Some(Numeric::On);

        let collator = Collator::try_new(&Default::default(), options)
            .map_err(|e| ListerError::Collation(e.to_string()))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }
}

/// Filters raw directory entry names to images, sorts them and maps them
/// to their public paths.
pub fn prepare_listing<I>(names: I) -> Result<Vec<String>, ListerError>
where
    I: IntoIterator<Item = String>,
{
    let order = NameOrder::new()?;

    let mut images: Vec<String> = names
        .into_iter()
        .filter(|name| is_image_file(name))
        .collect();
    images.sort_by(|a, b| order.compare(a, b));

    Ok(images
        .into_iter()
        .map(|name| format!("{}/{}", IMAGE_URL_PREFIX, name))
        .collect())
}
