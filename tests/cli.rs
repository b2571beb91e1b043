use std::fs;
use std::path::Path;
use anyhow::Result;
use assert_cmd::Command;
use assert_cmd::prelude::*;
use opencv::core::{CV_8UC1, Mat, Scalar};
use predicates::prelude::*;

/// 单个不可达阈值阶段的测试级联，加载成功但永远检测不到人脸
const CASCADE: &str = "tests/cascade.xml";

fn write_blank_image(path: &Path) -> Result<()> {
    let img = Mat::new_rows_cols_with_default(64, 64, CV_8UC1, Scalar::all(128.))?;
    facescan::utils::imwrite(path, &img)?;
    Ok(())
}

#[test]
fn missing_cascade_is_fatal() -> Result<()> {
    Command::cargo_bin("facescan")?
        .args(["--cascade", "nao-existe.xml"])
        .write_stdin("sair\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cascade file not found"));
    Ok(())
}

#[test]
fn invalid_cascade_is_fatal() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("quebrado.xml");
    fs::write(&path, "<opencv_storage></opencv_storage>")?;

    Command::cargo_bin("facescan")?
        .args(["--cascade"])
        .arg(&path)
        .write_stdin("sair\n")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn sair_terminates_with_exit_code_zero() -> Result<()> {
    Command::cargo_bin("facescan")?
        .args(["--cascade", CASCADE])
        .write_stdin("sair\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Digite \"sair\""));
    Ok(())
}

#[test]
fn invalid_input_keeps_the_loop_running() -> Result<()> {
    Command::cargo_bin("facescan")?
        .args(["--cascade", CASCADE])
        .write_stdin("notas.txt\nsair\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrada inválida"));
    Ok(())
}

#[test]
fn batch_mode_writes_one_output_per_accepted_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_blank_image(&dir.path().join("a.jpg"))?;
    write_blank_image(&dir.path().join("b.png"))?;
    fs::write(dir.path().join("c.JPG"), b"nao e imagem")?;
    fs::write(dir.path().join("d.txt"), b"nao e imagem")?;

    Command::cargo_bin("facescan")?
        .args(["--cascade", CASCADE])
        .write_stdin(format!("{}\nsair\n", dir.path().display()))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Quantidade de faces em a.jpg : 0")
                .and(predicate::str::contains("Quantidade de faces em b.png : 0"))
                // 大写后缀与文本文件各产生一行警告
                .and(predicate::str::contains("Entrada invalida").count(2)),
        );

    let saida = dir.path().join("saida");
    assert!(saida.join("a.jpg").is_file());
    assert!(saida.join("b.png").is_file());
    assert!(!saida.join("c.JPG").exists());
    assert!(!saida.join("d.txt").exists());
    Ok(())
}

#[test]
fn batch_rerun_is_idempotent() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_blank_image(&dir.path().join("a.jpg"))?;
    let input = format!("{}\nsair\n", dir.path().display());
    let output = dir.path().join("saida").join("a.jpg");

    let run = |input: &str| -> Result<()> {
        Command::cargo_bin("facescan")?
            .args(["--cascade", CASCADE])
            .write_stdin(input.to_owned())
            .assert()
            .success()
            // 输出目录本身不会被当作无效条目告警
            .stdout(predicate::str::contains("Entrada invalida").not());
        Ok(())
    };

    run(&input)?;
    let first = fs::read(&output)?;
    run(&input)?;
    let second = fs::read(&output)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn help_lists_the_detector_options() -> Result<()> {
    Command::cargo_bin("facescan")?
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--cascade")
                .and(predicate::str::contains("--camera"))
                .and(predicate::str::contains("--scale-factor"))
                .and(predicate::str::contains("--min-neighbors")),
        );
    Ok(())
}
