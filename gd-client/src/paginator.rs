//! Lazily-advancing page sequences over browse endpoints.

use std::sync::Arc;

use gd_format::PageInfo;

use crate::Result;
use crate::pipeline::Pipeline;
use crate::request::{Decoder, Request};
use crate::routes::Route;

/// One decoded page of results plus the ability to derive the next page.
///
/// A paginator is an immutable snapshot: advancing never mutates it, every
/// [`next_page`](Self::next_page) performs a fresh fetch and yields a new,
/// independent instance, and earlier pages stay valid.
///
/// The servers answer a page past the end with the same `-1` sentinel they
/// use for every logical failure, so running off the end surfaces as
/// [`crate::Error::MissingAccess`], indistinguishable from a genuine denial. Use
/// [`has_next`](Self::has_next) (derived from the pagination trailer) to
/// avoid the extra round trip where the trailer is trustworthy.
pub struct Paginator<T> {
    pipeline: Arc<Pipeline>,
    route: Route,
    base_params: Vec<(&'static str, String)>,
    decoder: Decoder<(Vec<T>, PageInfo)>,
    page: u32,
    items: Vec<T>,
    info: PageInfo,
}

impl<T> Paginator<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Fetch `page` of the request family described by `route` and
    /// `base_params` (everything but the page counter).
    pub(crate) async fn open(
        pipeline: Arc<Pipeline>,
        route: Route,
        base_params: Vec<(&'static str, String)>,
        decoder: Decoder<(Vec<T>, PageInfo)>,
        page: u32,
    ) -> Result<Self> {
        let mut request = Request::new(route, decoder);
        for (name, value) in &base_params {
            request = request.param(*name, value.clone());
        }
        let request = request.param("page", page.to_string());

        let (items, info) = pipeline.fetch(request).await?;

        Ok(Self {
            pipeline,
            route,
            base_params,
            decoder,
            page,
            items,
            info,
        })
    }

    /// The decoded elements of this page, in server order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the paginator, keeping only the elements.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Zero-indexed page number of this snapshot.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total number of elements the server reported.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.info.total
    }

    /// The raw pagination trailer for this page.
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.info
    }

    /// Whether the trailer promises a page after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.info.has_more(self.page)
    }

    /// Fetch the next page as a new, independent paginator.
    ///
    /// Past the last page the server returns its failure sentinel, so this
    /// resolves to [`crate::Error::MissingAccess`] at the end of the sequence
    /// as well as on a genuine denial.
    pub async fn next_page(&self) -> Result<Self> {
        Self::open(
            Arc::clone(&self.pipeline),
            self.route,
            self.base_params.clone(),
            self.decoder,
            self.page + 1,
        )
        .await
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("route", &self.route)
            .field("page", &self.page)
            .field("items", &self.items)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

