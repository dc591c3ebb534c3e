use crate::core::{StocksClient, StocksError, net};
use crate::series::StockPricePoint;
use crate::series::wire::decode_series;

/// `GET {base}/stocks/{symbol}?range={range}` and decode the price series.
///
/// # Errors
///
/// Returns [`StocksError::Status`] on a non-2xx response, [`StocksError::Http`] on
/// transport failure, and [`StocksError::Data`] if the body is not a series.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_series(
    client: &StocksClient,
    symbol: &str,
    range: &str,
) -> Result<Vec<StockPricePoint>, StocksError> {
    let mut url = client.endpoint(&["stocks", symbol])?;
    url.query_pairs_mut().append_pair("range", range);

    let resp = client.http().get(url).send().await?;
    let resp = net::ensure_success(resp)?;
    let body = net::get_text(resp, "series").await?;

    decode_series(&body)
}

/// `POST {base}/stocks/{symbol}/refresh`. The response body is ignored.
///
/// # Errors
///
/// Returns [`StocksError::Status`] on a non-2xx response and [`StocksError::Http`]
/// on transport failure.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn request_refresh(client: &StocksClient, symbol: &str) -> Result<(), StocksError> {
    let url = client.endpoint(&["stocks", symbol, "refresh"])?;

    let resp = client.http().post(url).send().await?;
    net::ensure_success(resp)?;

    Ok(())
}
