//! 初期データ
//!
//! 起動時に各シェルターへ投入する固定の動物レコード

use animal_shelter_common::types::{AnimalRecord, Sex};
use chrono::NaiveDate;

fn arrived(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 猫シェルターの初期データ（到着順）
pub fn cats() -> Vec<AnimalRecord> {
    vec![
        AnimalRecord {
            image_url: "https://assets3.thrillist.com/v1/image/2622128/size/tmg-slideshow_l.jpg"
                .to_string(),
            image_description: "Orange bengal cat with black stripes lounging on concrete."
                .to_string(),
            name: "Fluffy".to_string(),
            sex: Sex::Female,
            age: 2,
            breed: "Bengal".to_string(),
            story: "Thrown on the street".to_string(),
            time_stamp: arrived(1, 12, 2018),
        },
        AnimalRecord {
            image_url: "http://www.briarwoodanimalhospital.com/wp-content/uploads/sites/28/2016/08/hairballcats.jpg"
                .to_string(),
            image_description:
                "Gray cat lying on its back with crown of head on the floor, looking back."
                    .to_string(),
            name: "Belly Button".to_string(),
            sex: Sex::Male,
            age: 3,
            breed: "Mutt".to_string(),
            story: "A cat who loves to lie on his back with a tummy itching for a rubbing."
                .to_string(),
            time_stamp: arrived(2, 3, 2018),
        },
        AnimalRecord {
            image_url: "https://data.whicdn.com/images/15566661/original.jpg".to_string(),
            image_description: "Orange bengal cat with black stripes lounging on concrete."
                .to_string(),
            name: "Agnes".to_string(),
            sex: Sex::Female,
            age: 1,
            breed: "Mutt".to_string(),
            story: "Perfect crazy cat lady starter kit".to_string(),
            time_stamp: arrived(3, 20, 2018),
        },
    ]
}

/// 犬シェルターの初期データ（到着順）
pub fn dogs() -> Vec<AnimalRecord> {
    vec![
        AnimalRecord {
            image_url: "http://www.dogster.com/wp-content/uploads/2015/05/Cute%20dog%20listening%20to%20music%201_1.jpg"
                .to_string(),
            image_description: "A smiling golden-brown golden retreiver listening to music."
                .to_string(),
            name: "Zeus".to_string(),
            sex: Sex::Male,
            age: 3,
            breed: "Golden Retriever".to_string(),
            story: "Owner Passed away".to_string(),
            time_stamp: arrived(12, 28, 2017),
        },
        AnimalRecord {
            image_url: "http://images6.fanpop.com/image/photos/33500000/Cute-Dog-dogs-33531442-450-475.jpg"
                .to_string(),
            image_description: "A brown puppy covered in snow powder.".to_string(),
            name: "Chione".to_string(),
            sex: Sex::Male,
            age: 1,
            breed: "Retriever".to_string(),
            story: "Lost its wintry home due to global warming".to_string(),
            time_stamp: arrived(1, 30, 2018),
        },
        AnimalRecord {
            image_url: "https://1funny.com/wp-content/uploads/2011/03/dog-mail.jpg".to_string(),
            image_description: "A small, indoor terrier with chewed up mails and mail shreds trailing from front door's mail slot."
                .to_string(),
            name: "Mercury".to_string(),
            sex: Sex::Male,
            age: 4,
            breed: "Terrier".to_string(),
            story: "Loves to deliver (and destroy) your daily mails!".to_string(),
            time_stamp: arrived(2, 14, 2018),
        },
    ]
}
