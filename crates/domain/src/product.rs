//! # 商品レコード
//!
//! 各検索 API のレスポンスを正規化した出力用の商品レコード。
//!
//! 識別子のキー名は取得元によって異なる:
//!
//! | 取得元 | キー |
//! |--------|------|
//! | 楽天市場 | `id`（商品コード） |
//! | Amazon | `asin` |

use serde::{Deserialize, Serialize};

/// 商品識別子
///
/// `#[serde(flatten)]` で [`Product`] に埋め込まれ、バリアントに応じて
/// `id` または `asin` キーとしてシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductId {
    /// 楽天市場の商品コード（`shop:item` 形式）
    #[serde(rename = "id")]
    ItemCode(String),
    /// Amazon 標準識別番号
    #[serde(rename = "asin")]
    Asin(String),
}

/// 正規化された商品レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub id:              ProductId,
    pub title:           String,
    pub image_url:       Option<String>,
    /// 通貨換算なしの整数金額
    pub price:           Option<i64>,
    pub detail_page_url: String,
}

/// 検索成功時のレスポンス `{ "products": [...] }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
}

impl SearchResponse {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// 商品 0 件のレスポンス
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_楽天の商品はidキーでシリアライズされる() {
        let product = Product {
            id:              ProductId::ItemCode("shop:10000001".to_string()),
            title:           "ドリップバッグ".to_string(),
            image_url:       Some("https://thumbnail.image.rakuten.co.jp/a.jpg".to_string()),
            price:           Some(1980),
            detail_page_url: "https://item.rakuten.co.jp/shop/10000001/".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "shop:10000001",
                "title": "ドリップバッグ",
                "imageUrl": "https://thumbnail.image.rakuten.co.jp/a.jpg",
                "price": 1980,
                "detailPageUrl": "https://item.rakuten.co.jp/shop/10000001/"
            })
        );
    }

    #[test]
    fn test_amazonの商品はasinキーでシリアライズされnullも出力される() {
        let product = Product {
            id:              ProductId::Asin("B000000001".to_string()),
            title:           "タイトル不明".to_string(),
            image_url:       None,
            price:           None,
            detail_page_url: "https://www.amazon.co.jp/dp/B000000001".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["asin"], "B000000001");
        assert!(json.get("id").is_none());
        assert!(json["imageUrl"].is_null());
        assert!(json["price"].is_null());
    }

    #[test]
    fn test_空のレスポンスはproducts空配列になる() {
        let json = serde_json::to_value(SearchResponse::empty()).unwrap();

        assert_eq!(json, json!({ "products": [] }));
    }
}
