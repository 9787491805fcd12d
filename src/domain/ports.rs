/// Lookup of a translation template by key.
pub trait Translate {
    fn translate(&self, key: &str) -> Option<String>;
}

impl<F> Translate for F
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> Option<String> {
        self(key)
    }
}
