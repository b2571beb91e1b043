mod batch;
mod single;
mod video;

pub use batch::*;
pub use single::*;
pub use video::*;

use crate::cascade::FaceCascade;
use crate::config::{Mode, Opts};
use crate::utils;

/// 各操作模式共用的执行接口
pub trait ModeExtend {
    fn run(&self, opts: &Opts, cascade: &mut FaceCascade) -> anyhow::Result<()>;
}

const BANNER: &str = "\
------------------------------------------------------------
| Digite \"sair\" caso deseje encerrar o programa!           |
| Digite \"video\" caso deseje capturar faces pela webcam    |
------------------------------------------------------------";

const PROMPT: &str = "Digite o caminho para a pasta ou para o arquivo de imagem: ";

const INVALID_INPUT: &str = "Entrada inválida. Certifique-se de fornecer um arquivo de \
                             imagem válido ou o caminho para uma pasta contendo imagens.";

/// 交互主循环：每轮读取一行输入，解析为操作模式并分发，直到收到 sair
///
/// 单个模式的失败只打印错误并回到提示符，不会中断循环
pub fn run(opts: &Opts, mut cascade: FaceCascade) -> anyhow::Result<()> {
    loop {
        println!("{}", BANNER);
        let input = utils::read_line(PROMPT)?;
        let result = match Mode::parse(&input) {
            Mode::Exit => break,
            Mode::Video(cmd) => cmd.run(opts, &mut cascade),
            Mode::Batch(cmd) => cmd.run(opts, &mut cascade),
            Mode::Single(cmd) => cmd.run(opts, &mut cascade),
            Mode::Invalid(_) => {
                println!("{}", INVALID_INPUT);
                Ok(())
            }
        };
        if let Err(e) = result {
            eprintln!("[ERR] {}: {}", input, e);
        }
    }
    Ok(())
}
