//! 共通型定義
//!
//! AnimalRecord, Sex, Species等のコアデータ型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommonError;

/// シェルターに預けられている動物1頭分のレコード
///
/// 一度構築したら変更しない値型。キューは所有権ごと受け取り、取り出し時に
/// そのまま返す。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRecord {
    /// 画像URL
    #[serde(rename = "imageURL")]
    pub image_url: String,
    /// 画像の説明文（代替テキスト）
    pub image_description: String,
    /// 名前
    pub name: String,
    /// 性別
    pub sex: Sex,
    /// 年齢
    pub age: u32,
    /// 品種
    pub breed: String,
    /// 保護に至った経緯
    pub story: String,
    /// シェルターへの到着日 (`MM-DD-YYYY`)
    #[serde(
        default,
        with = "time_stamp_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_stamp: Option<NaiveDate>,
}

impl AnimalRecord {
    /// `other` より先に（または同じ日に）到着していれば true
    ///
    /// 到着日を持つレコードは持たないレコードより古いものとして扱う。
    /// どちらも到着日を持たない場合は `self` を優先する。
    pub fn arrived_no_later_than(&self, other: &AnimalRecord) -> bool {
        match (self.time_stamp, other.time_stamp) {
            (Some(mine), Some(theirs)) => mine <= theirs,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => true,
        }
    }
}

/// 性別
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    /// オス
    Male,
    /// メス
    Female,
}

impl FromStr for Sex {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Sex::Male),
            "Female" => Ok(Sex::Female),
            other => Err(CommonError::Validation(format!(
                "Invalid sex '{}', expected 'Male' or 'Female'",
                other
            ))),
        }
    }
}

/// シェルターの種別（動物の種）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// 猫
    Cat,
    /// 犬
    Dog,
}

impl Species {
    /// 全シェルター種別
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    /// 単数形の名前 ("cat" / "dog")
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
        }
    }

    /// 複数形の名前 ("cats" / "dogs")
    pub fn plural(&self) -> &'static str {
        match self {
            Species::Cat => "cats",
            Species::Dog => "dogs",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `timeStamp` フィールドの (de)serialize 実装
///
/// 文字列比較では年をまたぐ順序が崩れるため、日付型として保持する。
pub mod time_stamp_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    /// 到着日の書式
    pub const FORMAT: &str = "%m-%d-%Y";

    /// `MM-DD-YYYY` 形式の文字列を日付に変換
    pub fn parse(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
    }

    /// 日付を `MM-DD-YYYY` 形式で書き出す
    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// `MM-DD-YYYY` 形式の文字列（または null）を読み込む
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
