// src/domain/faq.rs

pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Group FAQs by category. Categories keep the order they first appear in,
/// and so do the entries inside each one.
pub fn group_by_category(faqs: &[Faq]) -> Vec<(String, Vec<&Faq>)> {
    let mut groups: Vec<(String, Vec<&Faq>)> = Vec::new();
    for faq in faqs {
        match groups
            .iter_mut()
            .find(|(cat, _)| cat.eq_ignore_ascii_case(&faq.category))
        {
            Some((_, entries)) => entries.push(faq),
            None => groups.push((faq.category.clone(), vec![faq])),
        }
    }
    groups
}

/// FAQs that came back without an id can't be opened on their own.
pub fn find_by_id<'a>(faqs: &'a [Faq], id: &str) -> Option<&'a Faq> {
    faqs.iter().find(|f| !f.id.is_empty() && f.id == id)
}
