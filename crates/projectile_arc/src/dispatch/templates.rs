//! Template sources — what to instantiate at fire point `i`

/// Per-index template lookup.
///
/// All three shapes normalize to `template(i)`; `Single` and `PerIndex` are
/// convenience wrappers over the `Builder` form.
pub enum TemplateSource<'a, T> {
    /// Same template for every fire point
    Single(&'a T),

    /// One template per fire point; must cover the shot count
    PerIndex(&'a [T]),

    /// Arbitrary index → template function
    Builder(&'a dyn Fn(usize) -> T),
}

impl<'a, T: Clone> TemplateSource<'a, T> {
    pub fn template(&self, index: usize) -> T {
        match self {
            TemplateSource::Single(template) => (*template).clone(),
            TemplateSource::PerIndex(templates) => templates[index].clone(),
            TemplateSource::Builder(build) => build(index),
        }
    }
}

impl<T> TemplateSource<'_, T> {
    /// Panics if a `PerIndex` source has fewer than `count` templates.
    pub fn assert_covers(&self, count: usize) {
        if let TemplateSource::PerIndex(templates) = self {
            assert!(
                templates.len() >= count,
                "template list has {} entries, shot_count is {}",
                templates.len(),
                count
            );
        }
    }
}
