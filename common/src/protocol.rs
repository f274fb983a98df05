//! 通信プロトコル定義
//!
//! クライアント↔シェルターサーバー間のリクエスト/レスポンス

use serde::{Deserialize, Serialize};

use crate::error::CommonError;
use crate::types::{time_stamp_format, AnimalRecord, Sex, Species};

/// 新規動物登録リクエスト
///
/// 必須フィールドの欠落を検出できるよう、全フィールドを `Option` で受ける。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimalRequest {
    /// 画像URL
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// 画像の説明文
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    /// 名前
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 性別 ("Male" / "Female")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    /// 年齢
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// 品種
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// 保護に至った経緯
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    /// 到着日 (`MM-DD-YYYY`、任意)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CommonError> {
    value.ok_or_else(|| CommonError::Validation(format!("Missing '{}' in request body", field)))
}

impl NewAnimalRequest {
    /// 必須フィールドを検証し、キューに投入可能なレコードへ変換する
    ///
    /// 欠落フィールドはJSONのフィールド順に検査し、最初に見つかったものを報告する。
    pub fn validate(self) -> Result<AnimalRecord, CommonError> {
        let image_url = required(self.image_url, "imageURL")?;
        let image_description = required(self.image_description, "imageDescription")?;
        let name = required(self.name, "name")?;
        let sex: Sex = required(self.sex, "sex")?.parse()?;
        let age = required(self.age, "age")?;
        let breed = required(self.breed, "breed")?;
        let story = required(self.story, "story")?;
        let time_stamp = self
            .time_stamp
            .map(|raw| {
                time_stamp_format::parse(&raw).map_err(|_| {
                    CommonError::Validation(format!(
                        "Invalid timeStamp '{}', expected MM-DD-YYYY",
                        raw
                    ))
                })
            })
            .transpose()?;

        Ok(AnimalRecord {
            image_url,
            image_description,
            name,
            sex,
            age,
            breed,
            story,
            time_stamp,
        })
    }
}

/// 最古の動物レスポンス (GET /api/oldest)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OldestAnimalResponse {
    /// 選ばれた動物のシェルター
    pub species: Species,
    /// 選ばれた動物
    pub animal: AnimalRecord,
}

/// ヘルスチェックレスポンス (GET /api/health)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// 状態 (常に "ok")
    pub status: String,
    /// 猫シェルターの頭数
    pub cats: usize,
    /// 犬シェルターの頭数
    pub dogs: usize,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// エラーメッセージ
    pub error: String,
}
