//! 動物キュー
//!
//! 到着順（FIFO）で動物レコードを保持する双方向連結リスト。
//! ノードはスロット配列に格納し、リンクはインデックスで表す。

use animal_shelter_common::types::AnimalRecord;

/// キュー内部のノード
#[derive(Debug)]
struct QueueNode {
    record: AnimalRecord,
    /// 先頭側（先に到着した側）の隣接ノード
    toward_head: Option<usize>,
    /// 末尾側（後から到着した側）の隣接ノード
    toward_tail: Option<usize>,
}

/// 動物キュー
///
/// `head` が `None` ⇔ `tail` が `None` ⇔ キューが空。
/// 容量上限・退避ポリシーはない。
#[derive(Debug, Default)]
pub struct AnimalQueue {
    slots: Vec<Option<QueueNode>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl AnimalQueue {
    /// 空のキューを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 末尾にレコードを追加
    pub fn enqueue(&mut self, record: AnimalRecord) {
        let index = self.allocate(QueueNode {
            record,
            toward_head: self.tail,
            toward_tail: None,
        });

        match self.tail {
            Some(tail) => {
                if let Some(old_tail) = self.slots[tail].as_mut() {
                    old_tail.toward_tail = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// 先頭のレコードを取り出す（空なら `None`）
    pub fn dequeue(&mut self) -> Option<AnimalRecord> {
        let index = self.head?;
        let node = self.slots[index].take()?;
        self.free.push(index);
        self.len -= 1;

        self.head = node.toward_tail;
        match self.head {
            Some(head) => {
                if let Some(new_head) = self.slots[head].as_mut() {
                    new_head.toward_head = None;
                }
            }
            None => {
                self.tail = None;
                // 空になったらスロットを解放
                self.slots.clear();
                self.free.clear();
            }
        }

        Some(node.record)
    }

    /// 先頭のレコードを参照する（空なら `None`）
    pub fn peek(&self) -> Option<&AnimalRecord> {
        self.node(self.head).map(|node| &node.record)
    }

    /// レコード数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 先頭から末尾の順にレコードを走査する
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn node(&self, index: Option<usize>) -> Option<&QueueNode> {
        index.and_then(|i| self.slots.get(i)).and_then(Option::as_ref)
    }

    fn allocate(&mut self, node: QueueNode) -> usize {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }
}

impl Extend<AnimalRecord> for AnimalQueue {
    fn extend<I: IntoIterator<Item = AnimalRecord>>(&mut self, iter: I) {
        for record in iter {
            self.enqueue(record);
        }
    }
}

impl FromIterator<AnimalRecord> for AnimalQueue {
    fn from_iter<I: IntoIterator<Item = AnimalRecord>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// [`AnimalQueue::iter`] のイテレータ
pub struct Iter<'a> {
    queue: &'a AnimalQueue,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a AnimalRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let queue = self.queue;
        let node = queue.node(self.cursor)?;
        self.cursor = node.toward_tail;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AnimalQueue {
    type Item = &'a AnimalRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
