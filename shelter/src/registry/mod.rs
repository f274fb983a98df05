//! シェルターレジストリ
//!
//! 猫・犬のシェルター（動物キュー）をプロセス全体で共有する状態として管理する。
//! キューごとに独立したロックを持ち、片方の操作がもう片方に影響することはない。

use std::sync::Arc;

use animal_shelter_common::{
    error::{ShelterError, ShelterResult},
    types::{AnimalRecord, Species},
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::queue::AnimalQueue;
use crate::seed;

/// シェルターレジストリ
#[derive(Clone, Default)]
pub struct ShelterRegistry {
    cats: Arc<RwLock<AnimalQueue>>,
    dogs: Arc<RwLock<AnimalQueue>>,
}

impl ShelterRegistry {
    /// 空のシェルターでレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定したレコードでレジストリを作成（各Vecの先頭が最初に引き渡される）
    pub fn from_records(cats: Vec<AnimalRecord>, dogs: Vec<AnimalRecord>) -> Self {
        Self {
            cats: Arc::new(RwLock::new(cats.into_iter().collect())),
            dogs: Arc::new(RwLock::new(dogs.into_iter().collect())),
        }
    }

    /// 初期データを投入したレジストリを作成
    pub fn with_seed() -> Self {
        Self::from_records(seed::cats(), seed::dogs())
    }

    fn shelter(&self, species: Species) -> &Arc<RwLock<AnimalQueue>> {
        match species {
            Species::Cat => &self.cats,
            Species::Dog => &self.dogs,
        }
    }

    /// 次に引き渡される動物を取得（キューは変更しない）
    pub async fn peek(&self, species: Species) -> ShelterResult<AnimalRecord> {
        let queue = self.shelter(species).read().await;
        queue
            .peek()
            .cloned()
            .ok_or(ShelterError::EmptyShelter(species))
    }

    /// 先頭の動物を引き渡し、同じレコードを末尾へ戻す
    ///
    /// 取り出しと再投入は同じ書き込みロック内で行う。頭数は変わらない。
    pub async fn rotate(&self, species: Species) -> ShelterResult<AnimalRecord> {
        let mut queue = self.shelter(species).write().await;
        let animal = queue
            .dequeue()
            .ok_or(ShelterError::EmptyShelter(species))?;
        queue.enqueue(animal.clone());

        info!(
            species = %species,
            name = %animal.name,
            "Adopted animal and returned it to the back of the shelter"
        );
        Ok(animal)
    }

    /// 検証済みの動物を末尾に追加
    pub async fn admit(&self, species: Species, animal: AnimalRecord) -> AnimalRecord {
        let mut queue = self.shelter(species).write().await;
        queue.enqueue(animal.clone());

        info!(
            species = %species,
            name = %animal.name,
            size = queue.len(),
            "Admitted new animal"
        );
        animal
    }

    /// 両シェルターの先頭のうち、到着日が古い方を取得
    ///
    /// 同日または到着日が無い場合は猫を優先する。片方が空ならもう片方の先頭を返す。
    /// 比較中は両方の読み取りロックを保持する（取得順は常に猫→犬）。
    pub async fn oldest(&self) -> ShelterResult<(Species, AnimalRecord)> {
        let cats = self.cats.read().await;
        let dogs = self.dogs.read().await;
        let cat = cats.peek().cloned();
        let dog = dogs.peek().cloned();
        drop(dogs);
        drop(cats);

        let chosen = match (cat, dog) {
            (Some(cat), Some(dog)) => {
                if cat.arrived_no_later_than(&dog) {
                    (Species::Cat, cat)
                } else {
                    (Species::Dog, dog)
                }
            }
            (Some(cat), None) => (Species::Cat, cat),
            (None, Some(dog)) => (Species::Dog, dog),
            (None, None) => return Err(ShelterError::NoAnimalsAvailable),
        };

        debug!(species = %chosen.0, name = %chosen.1.name, "Selected oldest animal");
        Ok(chosen)
    }

    /// 頭数
    pub async fn len(&self, species: Species) -> usize {
        self.shelter(species).read().await.len()
    }

    /// 先頭から末尾の順に全レコードを取得
    pub async fn list(&self, species: Species) -> Vec<AnimalRecord> {
        self.shelter(species).read().await.iter().cloned().collect()
    }
}
