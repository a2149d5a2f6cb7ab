use english_exercise_generator::config::Config;
use english_exercise_generator::content::day02::PHRASES_TRANSLATE;
use english_exercise_generator::infrastructure::Block;
use english_exercise_generator::models::Tier;
use english_exercise_generator::services::resolve_tier;
use english_exercise_generator::workflow::{all_generators, generate_worksheet, generator_for};
use english_exercise_generator::App;
use regex::Regex;
use std::fs;

/// 按大题统计题目区的带题号题目数（分页符之前）
fn numbered_questions_per_section(blocks: &[Block]) -> Vec<usize> {
    let mut counts = Vec::new();
    for block in blocks {
        match block {
            Block::PageBreak => break,
            Block::QuestionHeader { .. } => counts.push(0),
            Block::Question {
                number: Some(_), ..
            } => {
                if let Some(last) = counts.last_mut() {
                    *last += 1;
                }
            }
            _ => {}
        }
    }
    counts
}

#[test]
fn test_day2_concise_first_section() {
    let generator = generator_for(2).unwrap();
    let done = generate_worksheet(generator.as_ref(), Tier::Concise).unwrap();

    assert_eq!(
        done.answer_key.get("一、短语汉译英").unwrap(),
        ["1. look for", "2. look at", "3. look after", "4. get up"]
    );

    let prompts: Vec<&str> = done
        .document
        .blocks()
        .iter()
        .skip_while(|b| !matches!(b, Block::QuestionHeader { ordinal, .. } if ordinal == "一"))
        .skip(1)
        .take_while(|b| !matches!(b, Block::QuestionHeader { .. }))
        .filter_map(|b| match b {
            Block::Question {
                text,
                number: Some(_),
                ..
            } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(prompts.len(), 4);
    for (prompt, chinese) in prompts.iter().zip(["寻找", "看", "照顾", "起床"]) {
        assert!(prompt.contains(chinese), "{} 应包含 {}", prompt, chinese);
    }
}

#[test]
fn test_day2_enriched_includes_every_phrase() {
    let generator = generator_for(2).unwrap();
    let done = generate_worksheet(generator.as_ref(), Tier::Enriched).unwrap();
    let answers = done.answer_key.get("一、短语汉译英").unwrap();

    assert_eq!(answers.len(), PHRASES_TRANSLATE.len());
    assert_eq!(answers.last().unwrap(), "20. go to school");
}

#[test]
fn test_every_question_has_exactly_one_answer() {
    for generator in all_generators() {
        for tier in Tier::ALL {
            let done = generate_worksheet(generator.as_ref(), tier).unwrap();
            let per_section = numbered_questions_per_section(done.document.blocks());
            let answers: Vec<usize> = done.answer_key.iter().map(|(_, a)| a.len()).collect();
            assert_eq!(
                per_section, answers,
                "第{}天 {} 题目与答案数量不一致",
                generator.day(),
                tier
            );
        }
    }
}

#[test]
fn test_answers_are_numbered_from_one() {
    let numbered = Regex::new(r"^(\d+)\. \S").unwrap();
    for generator in all_generators() {
        let done = generate_worksheet(generator.as_ref(), Tier::Complete).unwrap();
        for (section, answers) in done.answer_key.iter() {
            for (idx, answer) in answers.iter().enumerate() {
                let caps = numbered
                    .captures(answer)
                    .unwrap_or_else(|| panic!("{} 格式错误: {}", section, answer));
                assert_eq!(caps[1].parse::<usize>().unwrap(), idx + 1);
            }
        }
    }
}

#[test]
fn test_answer_key_follows_page_break() {
    let generator = generator_for(5).unwrap();
    let done = generate_worksheet(generator.as_ref(), Tier::Concise).unwrap();
    let blocks = done.document.blocks();

    let page_break = blocks.iter().position(|b| *b == Block::PageBreak).unwrap();
    assert_eq!(blocks[page_break + 1], Block::AnswerKeyHeading);
    assert!(blocks[..page_break]
        .iter()
        .all(|b| !matches!(b, Block::AnswerLine(_) | Block::AnswerSection(_))));
    assert!(blocks[page_break..]
        .iter()
        .all(|b| !matches!(b, Block::QuestionHeader { .. })));
}

#[test]
fn test_richer_tier_extends_leaner_tier() {
    for generator in all_generators() {
        let concise = generate_worksheet(generator.as_ref(), Tier::Concise).unwrap();
        let enriched = generate_worksheet(generator.as_ref(), Tier::Enriched).unwrap();
        let counts = resolve_tier(generator.day(), Tier::Concise).unwrap();
        assert_eq!(concise.answer_key.len(), counts.len());

        // 配对题的选项顺序随题量变化，只比较前缀不变的大题
        for ((name, lean), (_, rich)) in concise.answer_key.iter().zip(enriched.answer_key.iter()) {
            if name.contains("配对") {
                continue;
            }
            assert!(
                rich.starts_with(lean),
                "第{}天 {} 不是充实版的前缀",
                generator.day(),
                name
            );
        }
    }
}

#[test]
fn test_generation_is_idempotent() {
    for generator in all_generators() {
        for tier in Tier::ALL {
            let first = generate_worksheet(generator.as_ref(), tier).unwrap();
            let second = generate_worksheet(generator.as_ref(), tier).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_packed_documents_are_byte_identical() {
    for generator in all_generators() {
        for tier in Tier::ALL {
            let first = generate_worksheet(generator.as_ref(), tier).unwrap();
            let second = generate_worksheet(generator.as_ref(), tier).unwrap();
            assert_eq!(
                first.document.to_bytes().unwrap(),
                second.document.to_bytes().unwrap(),
                "第{}天 {} 两次打包结果不同",
                generator.day(),
                tier
            );
        }
    }
}

#[test]
fn test_two_runs_write_identical_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    App::initialize(Config::default().with_output_dir(first.path()))
        .unwrap()
        .run()
        .unwrap();
    App::initialize(Config::default().with_output_dir(second.path()))
        .unwrap()
        .run()
        .unwrap();

    let mut compared = 0;
    for entry in fs::read_dir(first.path()).unwrap() {
        let name = entry.unwrap().file_name();
        let a = fs::read(first.path().join(&name)).unwrap();
        let b = fs::read(second.path().join(&name)).unwrap();
        assert_eq!(a, b, "{:?} 内容不同", name);
        compared += 1;
    }
    assert_eq!(compared, 27);
}

#[test]
fn test_app_writes_all_documents() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let log_file = dir.path().join("log.txt");

    let mut config = Config::default().with_output_dir(&out);
    config.output_log_file = Some(log_file.clone());

    App::initialize(config).unwrap().run().unwrap();

    let names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 27);
    assert!(names.contains(&"第2天_词汇基础_简洁版.docx".to_string()));
    assert!(names.contains(&"第10天_阅读理解_充实版.docx".to_string()));

    // docx 是 zip 包
    let bytes = fs::read(out.join("第6天_一般过去时_完整版.docx")).unwrap();
    assert_eq!(&bytes[..2], b"PK");

    let log = fs::read_to_string(&log_file).unwrap();
    assert_eq!(log.lines().filter(|l| l.starts_with("第")).count(), 27);
}

#[test]
fn test_rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::default().with_output_dir(dir.path());

    App::initialize(config.clone()).unwrap().run().unwrap();
    App::initialize(config).unwrap().run().unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 27);
}

#[test]
fn test_unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    // 与目标文件同名的目录让写入失败
    fs::create_dir(out.join("第3天_句型基础_完整版.docx")).unwrap();

    let config = Config::default().with_output_dir(&out);
    let err = App::initialize(config).unwrap().run().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("第3天 完整版"), "{}", message);
    assert!(message.starts_with("1 份"), "{}", message);

    // 其余文档照常生成
    let files = fs::read_dir(&out)
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_type().unwrap().is_file())
        .count();
    assert_eq!(files, 26);
}

#[test]
fn test_stop_on_error_halts_batch() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::create_dir(out.join("第2天_词汇基础_简洁版.docx")).unwrap();

    let mut config = Config::default().with_output_dir(&out);
    config.stop_on_error = true;
    assert!(App::initialize(config).unwrap().run().is_err());

    let files = fs::read_dir(&out)
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_type().unwrap().is_file())
        .count();
    assert_eq!(files, 0);
}

#[test]
fn test_output_dir_that_is_a_file_fails_initialization() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let config = Config::default().with_output_dir(&blocker);
    assert!(App::initialize(config).is_err());
}
