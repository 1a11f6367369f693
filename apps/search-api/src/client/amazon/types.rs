//! PA-API 5.0 SearchItems のリクエスト・レスポンス型
//!
//! レスポンスは要求した Resources やマーケットプレイスによって欠けるフィールドが多いため、
//! すべてのフィールドを `Option` + `#[serde(default)]` で受け、アクセサで辿る。

use serde::{Deserialize, Serialize};

/// 検索対象カテゴリ（全カテゴリ）
pub const SEARCH_INDEX_ALL: &str = "All";

/// 1 リクエストあたりの取得件数
pub const ITEM_COUNT: u32 = 10;

/// 取得するリソース
pub const SEARCH_RESOURCES: [&str; 3] = [
    "Images.Primary.Large",
    "ItemInfo.Title",
    "Offers.Listings.Price",
];

// --- リクエスト型 ---

/// SearchItems のリクエストパラメータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchItemsRequest {
    pub keywords:     String,
    pub search_index: String,
    pub item_count:   u32,
    pub resources:    Vec<String>,
}

impl SearchItemsRequest {
    /// 全カテゴリ・10 件・画像 / タイトル / 価格を取得するキーワード検索
    pub fn keyword_search(keywords: impl Into<String>) -> Self {
        Self {
            keywords:     keywords.into(),
            search_index: SEARCH_INDEX_ALL.to_string(),
            item_count:   ITEM_COUNT,
            resources:    SEARCH_RESOURCES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// 送信ボディ（リクエストパラメータ + 共通パラメータ）
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct SearchItemsPayload<'a> {
    #[serde(flatten)]
    pub request:      &'a SearchItemsRequest,
    pub partner_tag:  &'a str,
    pub partner_type: &'a str,
    pub marketplace:  &'a str,
}

// --- レスポンス型 ---

/// SearchItems のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchItemsResponse {
    pub search_result: Option<SearchResult>,
}

impl SearchItemsResponse {
    /// 検索結果の商品一覧を取り出す（存在しない場合は空）
    pub fn into_items(self) -> Vec<AmazonItem> {
        self.search_result
            .and_then(|result| result.items)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SearchResult {
    pub items: Option<Vec<AmazonItem>>,
}

/// 商品
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AmazonItem {
    #[serde(rename = "ASIN")]
    pub asin:            Option<String>,
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    pub item_info:       Option<ItemInfo>,
    pub images:          Option<Images>,
    pub offers:          Option<Offers>,
}

impl AmazonItem {
    /// `ItemInfo.Title.DisplayValue`
    pub fn display_title(&self) -> Option<&str> {
        self.item_info
            .as_ref()?
            .title
            .as_ref()?
            .display_value
            .as_deref()
    }

    /// `Images.Primary.Large.URL`
    pub fn primary_large_image_url(&self) -> Option<&str> {
        self.images
            .as_ref()?
            .primary
            .as_ref()?
            .large
            .as_ref()?
            .url
            .as_deref()
    }

    /// `Offers.Listings[0].Price.Amount`
    pub fn first_listing_amount(&self) -> Option<f64> {
        self.offers
            .as_ref()?
            .listings
            .as_ref()?
            .first()?
            .price
            .as_ref()?
            .amount
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemInfo {
    pub title: Option<DisplayValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisplayValue {
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Images {
    pub primary: Option<ImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImageSet {
    pub large: Option<ImageSize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Offers {
    pub listings: Option<Vec<Listing>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Listing {
    pub price: Option<OfferPrice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OfferPrice {
    pub amount: Option<f64>,
}

/// エラーレスポンスのボディ
///
/// ```json
/// {"__type": "com.amazon.paapi5#TooManyRequestsException",
///  "Errors": [{"Code": "TooManyRequests", "Message": "..."}]}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct ErrorBody {
    pub errors: Vec<ErrorData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub(super) struct ErrorData {
    pub code:    Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ペイロードに共通パラメータが平坦化される() {
        let request = SearchItemsRequest::keyword_search("ノートPC");
        let payload = SearchItemsPayload {
            request:      &request,
            partner_tag:  "shop-22",
            partner_type: "Associates",
            marketplace:  "www.amazon.co.jp",
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            json!({
                "Keywords": "ノートPC",
                "SearchIndex": "All",
                "ItemCount": 10,
                "Resources": [
                    "Images.Primary.Large",
                    "ItemInfo.Title",
                    "Offers.Listings.Price"
                ],
                "PartnerTag": "shop-22",
                "PartnerType": "Associates",
                "Marketplace": "www.amazon.co.jp"
            })
        );
    }

    #[test]
    fn test_ネストしたフィールドをアクセサで辿れる() {
        let body = json!({
            "SearchResult": {
                "Items": [{
                    "ASIN": "B000000001",
                    "DetailPageURL": "https://www.amazon.co.jp/dp/B000000001?tag=shop-22",
                    "ItemInfo": {"Title": {"DisplayValue": "ワイヤレスマウス"}},
                    "Images": {"Primary": {"Large": {"URL": "https://m.media-amazon.com/images/I/a.jpg"}}},
                    "Offers": {"Listings": [{"Price": {"Amount": 2480.0, "Currency": "JPY"}}]}
                }]
            }
        });

        let response: SearchItemsResponse = serde_json::from_value(body).unwrap();
        let items = response.into_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].asin.as_deref(), Some("B000000001"));
        assert_eq!(items[0].display_title(), Some("ワイヤレスマウス"));
        assert_eq!(
            items[0].primary_large_image_url(),
            Some("https://m.media-amazon.com/images/I/a.jpg")
        );
        assert_eq!(items[0].first_listing_amount(), Some(2480.0));
    }

    #[test]
    fn test_欠けたフィールドはnoneになる() {
        let body = json!({"SearchResult": {"Items": [{"ASIN": "B0", "Offers": {"Listings": []}}]}});

        let response: SearchItemsResponse = serde_json::from_value(body).unwrap();
        let items = response.into_items();

        assert_eq!(items[0].display_title(), None);
        assert_eq!(items[0].primary_large_image_url(), None);
        assert_eq!(items[0].first_listing_amount(), None);
    }

    #[test]
    fn test_search_resultがなければ空() {
        let response: SearchItemsResponse = serde_json::from_value(json!({})).unwrap();

        assert!(response.into_items().is_empty());
    }
}
