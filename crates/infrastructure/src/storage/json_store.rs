use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use courier_core::CourierResult;

/// JSON集合存储
///
/// 每个集合对应数据目录下的一个 `<名称>.json` 数组文档。读取缺失的集合
/// 返回空列表；写入总是整体覆盖。文档内的元素顺序即存储顺序。
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// 打开数据目录，不存在时创建
    pub async fn open(root: impl Into<PathBuf>) -> CourierResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        debug!("数据目录已就绪: {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// 整体载入一个集合，文档缺失时返回空集合
    pub async fn load_collection<T: DeserializeOwned>(&self, name: &str) -> CourierResult<Vec<T>> {
        let path = self.collection_path(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let items: Vec<T> = serde_json::from_slice(&bytes)?;
                debug!("载入集合 {name}: {} 条记录", items.len());
                Ok(items)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// 整体覆盖写回一个集合
    pub async fn save_collection<T: Serialize>(&self, name: &str, items: &[T]) -> CourierResult<()> {
        let path = self.collection_path(name);
        let bytes = serde_json::to_vec_pretty(items)?;
        tokio::fs::write(&path, bytes).await?;
        debug!("写回集合 {name}: {} 条记录", items.len());
        Ok(())
    }
}
