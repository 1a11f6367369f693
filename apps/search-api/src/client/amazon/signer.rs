//! AWS Signature Version 4 による PA-API リクエスト署名
//!
//! PA-API 5.0 はクエリ文字列を使わない POST リクエストのみのため、
//! 正規クエリ文字列は常に空とする。

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// 署名対象のリクエスト
pub(super) struct SigningRequest<'a> {
    pub method:  &'a str,
    pub path:    &'a str,
    /// 署名対象ヘッダー（キーは小文字）
    pub headers: &'a BTreeMap<String, String>,
    pub payload: &'a [u8],
}

/// 署名に使うスコープ情報
pub(super) struct SigningScope<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region:     &'a str,
    pub service:    &'a str,
}

/// `x-amz-date` ヘッダー形式（`YYYYMMDDTHHMMSSZ`）
pub(super) fn amz_date(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

/// `Authorization` ヘッダーの値を生成する
pub(super) fn authorization(
    scope: &SigningScope<'_>,
    request: &SigningRequest<'_>,
    now: DateTime<Utc>,
) -> String {
    let date = now.format("%Y%m%d").to_string();
    let credential_scope = format!(
        "{date}/{}/{}/aws4_request",
        scope.region, scope.service
    );

    let signed_headers = request
        .headers
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";");

    let string_to_sign = format!(
        "{ALGORITHM}\n{}\n{credential_scope}\n{}",
        amz_date(now),
        sha256_hex(canonical_request(request, &signed_headers).as_bytes())
    );

    let signing_key = signing_key(scope.secret_key, &date, scope.region, scope.service);
    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes()));

    format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        scope.access_key
    )
}

fn canonical_request(request: &SigningRequest<'_>, signed_headers: &str) -> String {
    let canonical_headers: String = request
        .headers
        .iter()
        .map(|(name, value)| format!("{name}:{}\n", value.trim()))
        .collect();

    format!(
        "{}\n{}\n\n{canonical_headers}\n{signed_headers}\n{}",
        request.method,
        request.path,
        sha256_hex(request.payload)
    )
}

fn signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC は任意長の鍵を受け付ける");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
