use crate::models::job::GenerationJob;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载数据并转换为 GenerationJob 对象
pub async fn load_toml_to_job(toml_file_path: &Path) -> Result<GenerationJob> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let job: GenerationJob = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    job.validate()
        .with_context(|| format!("作业文件校验失败: {}", toml_file_path.display()))?;

    Ok(job)
}

/// 加载作业文件，文件不存在时退回默认作业
pub async fn load_job_or_default(toml_file_path: &str) -> Result<GenerationJob> {
    let path = Path::new(toml_file_path);

    if !path.exists() {
        tracing::warn!("⚠️ 作业文件不存在: {}，使用默认作业", toml_file_path);
        return Ok(GenerationJob::default());
    }

    tracing::info!(
        "正在加载: {}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );

    load_toml_to_job(path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_full_job() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
model = "llama3-13b"
subject = "Physics"
topic = "Quantum Mechanics"
total_questions = 12
easy_pct = 25
medium_pct = 25
hard_pct = 50
"#
        )
        .unwrap();

        let job = load_toml_to_job(file.path()).await.unwrap();
        assert_eq!(job.model, "llama3-13b");
        assert_eq!(job.subject, "Physics");
        assert_eq!(job.topic, "Quantum Mechanics");
        assert_eq!(job.total_questions, 12);
        assert_eq!(job.hard_pct, 50);
    }

    #[tokio::test]
    async fn test_load_applies_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "subject = \"History\"\n").unwrap();

        let job = load_toml_to_job(file.path()).await.unwrap();
        assert_eq!(job.subject, "History");
        assert_eq!(job.model, "llama3-8b-8192");
        assert_eq!(job.total_questions, 10);
    }

    #[tokio::test]
    async fn test_load_rejects_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "total_questions = 200\n").unwrap();

        assert!(load_toml_to_job(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_default() {
        let job = load_job_or_default("definitely/not/there.toml")
            .await
            .unwrap();
        assert_eq!(job.total_questions, 10);
    }
}
