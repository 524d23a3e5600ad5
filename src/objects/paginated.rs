//! Paginated collections over list endpoints.

use std::collections::BTreeMap;

use futures::stream::{self, Stream};
use serde_json::Value;

use crate::client::LinodeClient;
use crate::clients::{HttpMethod, HttpRequest};
use crate::objects::errors::{FormatError, LinodeError};
use crate::objects::object::ApiObject;
use crate::objects::schema::{ObjectId, ResourceSchema};

/// The full, possibly multi-page, result of a list endpoint.
///
/// Creating a list fetches its first page, which fixes the total length,
/// the page count and the page size. Other pages are fetched when an index
/// inside them is first accessed. Pages are 0-based here and 1-based on the
/// wire.
///
/// # Example
///
/// ```rust,ignore
/// let mut regions = client.regions().await?;
/// println!("{} regions", regions.len());
///
/// let last = regions.last(&client).await?;
///
/// let mut stream = Box::pin(regions.iter(&client));
/// while let Some(region) = stream.try_next().await? {
///     println!("{:?}", region.id());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct PaginatedList {
    schema: &'static ResourceSchema,
    endpoint: String,
    parent_id: Option<ObjectId>,
    filters: Vec<(String, String)>,
    requested_page_size: u32,
    page_size: usize,
    total: usize,
    page_count: usize,
    pages: BTreeMap<usize, Vec<ApiObject>>,
}

struct Page {
    items: Vec<ApiObject>,
    results: Option<usize>,
    pages: Option<usize>,
}

impl PaginatedList {
    /// Fetches the first page of a list endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] if a nested schema gets no
    /// parent id, [`LinodeError::Format`] if the response has no `data`
    /// array or an element fails to decode, and the usual status errors.
    pub async fn fetch(
        client: &LinodeClient,
        schema: &'static ResourceSchema,
        parent_id: Option<ObjectId>,
        filters: Vec<(String, String)>,
    ) -> Result<Self, LinodeError> {
        let endpoint = schema.collection_path(parent_id.as_ref())?;
        let requested_page_size = client.config().page_size();

        let mut list = Self {
            schema,
            endpoint,
            parent_id,
            filters,
            requested_page_size,
            page_size: requested_page_size as usize,
            total: 0,
            page_count: 1,
            pages: BTreeMap::new(),
        };

        let first = list.request_page(client, 0).await?;
        list.total = first.results.unwrap_or(first.items.len());
        list.page_count = first.pages.unwrap_or(1).max(1);
        if list.page_count > 1 && !first.items.is_empty() {
            list.page_size = first.items.len();
        }
        list.pages.insert(0, first.items);

        Ok(list)
    }

    /// Returns the server-reported total number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of elements per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the server-reported number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns how many pages have been fetched so far.
    #[must_use]
    pub fn pages_loaded(&self) -> usize {
        self.pages.len()
    }

    /// Returns the list endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns an already fetched element without any I/O.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ApiObject> {
        self.pages
            .get(&(index / self.page_size))
            .and_then(|page| page.get(index % self.page_size))
    }

    /// Returns the element at `index`, fetching its page if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::IndexOutOfRange`] before any I/O if
    /// `index >= len()`. A failed page fetch leaves loaded pages intact.
    pub async fn at(
        &mut self,
        client: &LinodeClient,
        index: usize,
    ) -> Result<&ApiObject, LinodeError> {
        if index >= self.total {
            return Err(LinodeError::IndexOutOfRange {
                index,
                len: self.total,
            });
        }

        let page_index = index / self.page_size;
        self.load_page(client, page_index).await?;

        self.pages
            .get(&page_index)
            .and_then(|page| page.get(index % self.page_size))
            .ok_or_else(|| LinodeError::ListChanged {
                endpoint: self.endpoint.clone(),
            })
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::IndexOutOfRange`] if the list is empty.
    pub async fn first(&mut self, client: &LinodeClient) -> Result<&ApiObject, LinodeError> {
        self.at(client, 0).await
    }

    /// Returns the last element, fetching the last page if needed.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::IndexOutOfRange`] if the list is empty.
    pub async fn last(&mut self, client: &LinodeClient) -> Result<&ApiObject, LinodeError> {
        let index = self.total.checked_sub(1).ok_or(LinodeError::IndexOutOfRange {
            index: 0,
            len: 0,
        })?;
        self.at(client, index).await
    }

    /// Returns the only element.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::InvalidParameter`] unless the list has exactly
    /// one element.
    pub async fn only(&mut self, client: &LinodeClient) -> Result<&ApiObject, LinodeError> {
        if self.total != 1 {
            return Err(LinodeError::invalid(
                "only",
                format!("expected exactly one element, found {}", self.total),
            ));
        }
        self.at(client, 0).await
    }

    /// Streams every element in ascending order.
    ///
    /// Loaded pages are reused; missing pages are fetched as the stream
    /// reaches them. The stream ends after the first error. Calling `iter`
    /// again restarts from index 0.
    #[allow(clippy::iter_not_returning_iterator)]
    pub fn iter<'a>(
        &'a mut self,
        client: &'a LinodeClient,
    ) -> impl Stream<Item = Result<ApiObject, LinodeError>> + 'a {
        stream::try_unfold((self, 0_usize), move |(list, index)| async move {
            if index >= list.len() {
                return Ok::<_, LinodeError>(None);
            }
            let object = list.at(client, index).await?.clone();
            Ok(Some((object, (list, index + 1))))
        })
    }

    /// Fetches every missing page and returns all elements in order.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    #[allow(clippy::wrong_self_convention)]
    pub async fn to_vec(&mut self, client: &LinodeClient) -> Result<Vec<ApiObject>, LinodeError> {
        for page_index in 0..self.page_count {
            self.load_page(client, page_index).await?;
        }
        Ok(self.pages.values().flatten().cloned().collect())
    }

    async fn load_page(
        &mut self,
        client: &LinodeClient,
        page_index: usize,
    ) -> Result<(), LinodeError> {
        if self.pages.contains_key(&page_index) {
            return Ok(());
        }

        let page = self.request_page(client, page_index).await?;
        let results = page.results.unwrap_or(page.items.len());
        let pages = page.pages.unwrap_or(1).max(1);
        if results != self.total || pages != self.page_count {
            tracing::warn!(
                endpoint = %self.endpoint,
                expected_results = self.total,
                results,
                "list changed while paging"
            );
            return Err(LinodeError::ListChanged {
                endpoint: self.endpoint.clone(),
            });
        }

        self.pages.insert(page_index, page.items);
        Ok(())
    }

    async fn request_page(
        &self,
        client: &LinodeClient,
        page_index: usize,
    ) -> Result<Page, LinodeError> {
        tracing::debug!(endpoint = %self.endpoint, page = page_index + 1, "loading page");

        let request = HttpRequest::builder(HttpMethod::Get, self.endpoint.clone())
            .query_param("page", (page_index + 1).to_string())
            .query_param("page_size", self.requested_page_size.to_string())
            .query(self.filters.iter().cloned())
            .build()?;
        let body = client.execute(request, self.schema.name, None).await?;

        let data = body
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| FormatError::MissingData {
                endpoint: self.endpoint.clone(),
            })?;
        let items = data
            .iter()
            .map(|item| ApiObject::from_summary(self.schema, item, self.parent_id.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        let count = |key: &str| {
            body.get(key)
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok())
        };

        Ok(Page {
            items,
            results: count("results"),
            pages: count("pages"),
        })
    }
}
