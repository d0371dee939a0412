use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(map: HashMap<String, String>) -> Self {
        Self { inner: map }
    }
}

#[derive(Clone, Debug)]
pub struct NetOptions {
    /// Make every cache between us and the origin revalidate before answering.
    pub bypass_cache: bool,
    /// Extra headers sent with every request.
    pub headers: Headers,
    /// Max idle connections per host. Ignored in the browser.
    pub pool_max_idle_per_host: usize,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            bypass_cache: true,
            headers: Headers::new(),
            pool_max_idle_per_host: 0,
        }
    }
}

impl NetOptions {
    /// Headers for a single request: the configured extras plus the
    /// cache-bypass pair when `bypass_cache` is set.
    pub fn request_headers(&self) -> Headers {
        let mut headers = self.headers.clone();
        if self.bypass_cache {
            headers.insert("Cache-Control", "no-cache");
            headers.insert("Pragma", "no-cache");
        }
        headers
    }
}
