//! Chapter 3: arrays, slices, strings, maps and structs.
//!
//! Every slice here is a [`SliceView`], so the aliasing shown in the
//! output is the model's real behaviour rather than a simulation.

use std::io::Write;

use itertools::Itertools;

use super::LessonResult;
use crate::array::FixedArray;
use crate::assoc::{AssocMap, KeySet};
use crate::config::CourseConfig;
use crate::literal::SparseLiteral;
use crate::narrate::Narrator;
use crate::text;
use crate::view::SliceView;

pub fn run<W: Write>(n: &mut Narrator<W>, config: &CourseConfig) -> LessonResult {
    arrays(n)?;
    slices(n, config)?;
    subslices(n)?;
    copies(n)?;
    strings(n)?;
    maps(n)?;
    structs(n)?;
    Ok(())
}

fn strs<const N: usize>(items: [&str; N]) -> SliceView<String> {
    items.into_iter().map(String::from).collect()
}

fn arrays<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    n.section("Array Declaration")?;
    let arr_a: FixedArray<i32, 3> = FixedArray::new();
    let arr_b = FixedArray::from([10, 20, 30]);
    let arr_c: FixedArray<i32, 15> = SparseLiteral::new()
        .value(1)
        .at(5, 4)
        .value(6)
        .value(10)
        .value(100)
        .value(15)
        .into_array()?;
    n.line("arrA", &arr_a)?;
    n.line("arrB", &arr_b)?;
    n.line("arrC", &arr_c)?;
    n.blank()?;

    n.section("Comparing Arrays")?;
    let arr_f = FixedArray::from([1, 2, 3, 4, 5]);
    let arr_g = FixedArray::from([1, 2, 3, 4, 5]);
    n.line("arrF == arrG?", arr_f == arr_g)?;
    n.blank()?;

    n.section("Multidimensional Arrays")?;
    let grid: FixedArray<FixedArray<i32, 5>, 5> = FixedArray::new();
    for row in grid.to_vec() {
        n.text(&row)?;
    }
    n.blank()?;

    n.section("Array Access")?;
    let mut arr_i = FixedArray::from([10, 20, 30]);
    for i in 0..arr_i.len() {
        n.line(&format!("arrI[{i}]"), arr_i.get(i)?)?;
    }
    arr_i.set(0, 15)?;
    arr_i.set(1, 25)?;
    arr_i.set(2, 35)?;
    n.line("after writes, arrI", &arr_i)?;
    n.line("length", arr_i.len())?;
    n.blank()?;
    Ok(())
}

fn slices<W: Write>(n: &mut Narrator<W>, config: &CourseConfig) -> LessonResult {
    n.section("Slice Declarations")?;
    let slice_a = SliceView::from(vec![10, 20, 30, 40]);
    let slice_b = SparseLiteral::new()
        .value(1)
        .at(5, 4)
        .value(6)
        .value(10)
        .value(100)
        .value(15)
        .into_view()?;
    let slice_nil: SliceView<i32> = SliceView::nil();
    n.line("sliceA", &slice_a)?;
    n.line("sliceB", &slice_b)?;
    n.line("sliceNil", &slice_nil)?;
    n.line("sliceNil is nil?", slice_nil.is_nil())?;
    n.blank()?;

    n.section("Slice Access")?;
    let slice_d = SliceView::from_literal(vec![10, 20, 30]);
    slice_d.set(0, 15)?;
    n.line("sliceD[0]", slice_d.get(0)?)?;
    n.line("sliceD", &slice_d)?;
    for (i, value) in slice_d.iter().enumerate() {
        n.text(format!("{i}: {value}"))?;
    }
    if let Err(err) = slice_d.get(slice_d.len()) {
        n.line("sliceD[3]", err)?;
    }
    n.blank()?;

    n.section("Comparing Slices")?;
    let x = SliceView::from_literal(vec![1, 2, 3, 4, 5]);
    let y = SliceView::from_literal(vec![1, 2, 3, 4, 5]);
    let z = SliceView::from_literal(vec![1, 2, 3, 4, 5, 6]);
    n.line("equal(sliceX, sliceY)", x == y)?;
    n.line("equal(sliceX, sliceZ)", x == z)?;
    n.blank()?;

    n.section("Appending to a Slice")?;
    let slice_g: SliceView<i32> = SliceView::nil().append(&[100]);
    let slice_h = SliceView::from_literal(vec![1, 2, 3, 4, 5]).append(&[6, 7, 8, 9]);
    n.line("sliceG", &slice_g)?;
    n.line("sliceH", &slice_h)?;
    n.line("sliceH extended with sliceG", slice_h.append_view(&slice_g))?;
    n.blank()?;

    n.section("Appending and Slice Capacity")?;
    n.text("Slice\tLen\tCap")?;
    let mut growing: SliceView<i32> = SliceView::nil().with_policy(config.growth);
    n.text(format!("{growing}\t{}\t{}", growing.len(), growing.cap()))?;
    for value in [10, 20, 30, 40, 50] {
        growing = growing.append(&[value]);
        n.text(format!("{growing}\t{}\t{}", growing.len(), growing.cap()))?;
    }
    n.blank()?;

    n.section("Declaring a Slice with make")?;
    let slice_i: SliceView<i32> = SliceView::with_len(5);
    let slice_j: SliceView<i32> = SliceView::make(5, 10)?;
    let slice_k: SliceView<i32> = SliceView::make(0, 10)?;
    for (label, view) in [("sliceI", &slice_i), ("sliceJ", &slice_j), ("sliceK", &slice_k)] {
        n.text(format!("{label} = {view} len = {} cap = {}", view.len(), view.cap()))?;
    }
    let slice_k = slice_k.append(&[1, 2, 3, 4, 5]);
    n.text(format!(
        "after append, sliceK = {slice_k} len = {} cap = {}",
        slice_k.len(),
        slice_k.cap()
    ))?;
    n.blank()?;

    n.section("Resetting a Slice with clear")?;
    let words = strs(["first", "second", "third"]);
    let numbers = SliceView::from_literal(vec![100, 200, 300]);
    words.clear();
    numbers.clear();
    n.text(format!("words = {words} len = {} cap = {}", words.len(), words.cap()))?;
    n.text(format!("numbers = {numbers} len = {} cap = {}", numbers.len(), numbers.cap()))?;
    n.blank()?;
    Ok(())
}

fn subslices<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    n.section("Subslicing")?;
    let slice_m = strs(["a", "b", "c", "d"]);
    let sub1 = slice_m.slice_to(2)?;
    let sub2 = slice_m.slice_from(1)?;
    let sub3 = slice_m.slice(1, 3)?;
    let sub4 = slice_m.slice_all();
    n.line("sliceM[:2]", &sub1)?;
    n.line("sliceM[1:]", &sub2)?;
    n.line("sliceM[1:3]", &sub3)?;
    n.line("sliceM[:]", &sub4)?;
    n.blank()?;

    n.section("Modifying One Subslice Affects All Others")?;
    slice_m.set(1, "y".into())?;
    sub1.set(0, "x".into())?;
    sub2.set(1, "z".into())?;
    n.line("sliceM", &slice_m)?;
    n.line("subM1", &sub1)?;
    n.line("subM2", &sub2)?;
    n.line("subM3", &sub3)?;
    n.line("subM4", &sub4)?;
    n.blank()?;

    n.section("Appending to a Subslice")?;
    n.text(format!("before: sliceM cap = {} {slice_m}", slice_m.cap()))?;
    let sub1 = sub1.append(&["zz".into()]);
    n.text(format!("after:  sliceM cap = {} {slice_m}", slice_m.cap()))?;
    n.text(format!("after:  subM1  cap = {} {sub1}", sub1.cap()))?;
    n.blank()?;

    n.section("Full Slice Expressions")?;
    let slice_n: SliceView<String> = SliceView::make(0, 5)?;
    let slice_n = slice_n.append(&["a", "b", "c", "d", "e"].map(String::from));
    let sub_n1 = slice_n.slice_full(1, 4, 4)?;
    let sub_n2 = slice_n.slice_full(2, 4, 4)?;
    n.text(format!(
        "capacities: {} {} {}",
        slice_n.cap(),
        sub_n1.cap(),
        sub_n2.cap()
    ))?;
    let sub_n1 = sub_n1.append(&["i", "j", "k"].map(String::from));
    let slice_n = slice_n.append(&["x", "y"].map(String::from));
    let sub_n2 = sub_n2.append(&["z", "zz"].map(String::from));
    n.line("sliceN", &slice_n)?;
    n.line("subN1", &sub_n1)?;
    n.line("subN2", &sub_n2)?;
    n.blank()?;
    Ok(())
}

fn copies<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    n.section("Slicing Copy")?;
    let slice_o = SliceView::from_literal(vec![1, 2, 3, 4, 5]);
    let slice_p: SliceView<i32> = SliceView::with_len(10);
    let copied = SliceView::copy(&slice_p, &slice_o);
    n.text(format!("dest = {slice_p} copied {copied} elements"))?;

    let slice_q: SliceView<i32> = SliceView::with_len(2);
    let copied = SliceView::copy(&slice_q, &slice_o);
    n.text(format!("dest = {slice_q} copied {copied} elements"))?;

    let middle = slice_o.slice_from(2)?;
    let slice_r: SliceView<i32> = SliceView::with_len(middle.len());
    SliceView::copy(&slice_r, &middle);
    n.text(format!("dest = {slice_r}"))?;
    n.blank()?;

    n.section("Overlapping Copies")?;
    let copied = SliceView::copy(&slice_o.slice_to(3)?, &slice_o.slice_from(1)?);
    n.text(format!("After Copying: {slice_o} copied {copied} elements"))?;
    n.blank()?;

    n.section("Copying With Arrays")?;
    let slice_t = SliceView::from_literal(vec![1, 2, 3, 4]);
    let arr_l = FixedArray::from([5, 6, 7, 8]);
    let slice_u: SliceView<i32> = SliceView::with_len(2);
    SliceView::copy(&slice_u, &arr_l.as_view());
    n.text(format!("from array: {slice_u} {arr_l}"))?;
    SliceView::copy(&arr_l.as_view(), &slice_t);
    n.text(format!("into array: {arr_l} {slice_t}"))?;
    n.blank()?;

    n.section("Converting Between Arrays and Slices")?;
    let mut b_array = FixedArray::from([100, 200, 300, 400]);
    let b_slice: SliceView<i32> = SliceView::with_len(b_array.len());
    SliceView::copy(&b_slice, &b_array.as_view());
    b_slice.set(0, 10000)?;
    b_array.set(3, 40000)?;
    n.line("bArray", &b_array)?;
    n.line("bSlice", &b_slice)?;

    let c_slice = SliceView::from_literal(vec![10, 20, 30, 40]);
    let mut c_array: [i32; 4] = c_slice.to_array()?;
    let small_array: [i32; 2] = c_slice.to_array()?;
    c_slice.set(0, 10000)?;
    c_array[3] = 40000;
    n.line("cSlice", &c_slice)?;
    n.line("cArray", format!("[{}]", c_array.iter().join(" ")))?;
    n.line("smallArray", format!("[{}]", small_array.iter().join(" ")))?;
    n.blank()?;
    Ok(())
}

fn strings<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    for (title, s) in [
        ("Strings", "Hello there!"),
        ("Strings With Multi-byte Code Points", "Hello 😊!"),
    ] {
        n.section(title)?;
        n.line("str", s)?;
        n.line("len (bytes)", s.len())?;
        n.line("runes", text::rune_count(s))?;
        n.line("str[6]", text::byte_at(s, 6)?)?;
        n.line("str[4:7]", text::lossy(&text::byte_range(s, 4, 7)?))?;
        n.line("str[:5]", text::lossy(&text::byte_range(s, 0, 5)?))?;
        n.line("str[6:]", text::lossy(&text::byte_range(s, 6, s.len())?))?;
        n.blank()?;
    }

    n.section("Strings, Runes and Bytes")?;
    let s = "Hello 😊!";
    n.line("bytes", text::bytes(s))?;
    n.line("runes", text::runes(s))?;
    n.blank()?;
    Ok(())
}

fn maps<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    n.section("Reading and Writing to Maps")?;
    let mut total_wins: AssocMap<&str, i32> = AssocMap::new();
    total_wins.insert("Orcas", 1);
    total_wins.insert("Lions", 2);
    total_wins.update("Kittens", |wins| wins + 1);
    total_wins.insert("Lions", 3);
    n.line("totalWins", &total_wins)?;
    n.line("totalWins[\"Bears\"]", total_wins.get(&"Bears"))?;
    n.blank()?;

    n.section("Comma-Ok Idiom")?;
    let greet: AssocMap<&str, i32> = [("hello", 5), ("world", 0)].into_iter().collect();
    for key in ["hello", "world", "hi"] {
        let (value, ok) = greet.lookup(&key);
        n.text(format!("{key} => {value} {ok}"))?;
    }
    n.blank()?;

    n.section("Deleting and Clearing")?;
    let mut del_map: AssocMap<&str, i32> = [("hello", 5), ("world", 10)].into_iter().collect();
    del_map.remove(&"hello");
    del_map.remove(&"unknownKey");
    n.line("after delete", &del_map)?;
    del_map.clear();
    n.text(format!("after clear: {del_map} len = {}", del_map.len()))?;
    n.blank()?;

    n.section("Maps as Sets")?;
    let vals = [5, 10, 2, 1, 5, 8, 7, 3, 9, 8, 1, 2, 10];
    let int_set: KeySet<i32> = vals.into_iter().collect();
    n.text(format!("vals len = {}", vals.len()))?;
    n.text(format!(
        "set = [{}] len = {}",
        int_set.sorted().into_iter().join(" "),
        int_set.len()
    ))?;
    n.line("5 in set?", int_set.contains(&5))?;
    n.line("2000 in set?", int_set.contains(&2000))?;
    n.blank()?;
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    first_name: String,
    last_name: String,
    dob: String,
    fav_num: i32,
    is_adult: bool,
}

fn structs<W: Write>(n: &mut Narrator<W>) -> LessonResult {
    n.section("Struct Declaration")?;
    let fred = Person::default();
    let julia = Person {
        first_name: "julia".into(),
        last_name: "smith".into(),
        dob: "1969-01-01".into(),
        fav_num: 77,
        is_adult: true,
    };
    let mut john = Person {
        dob: "2023-01-01".into(),
        last_name: "smith".into(),
        first_name: "john".into(),
        ..Person::default()
    };
    n.line("fred", format!("{fred:?}"))?;
    n.line("julia", format!("{julia:?}"))?;
    n.line("john", format!("{john:?}"))?;
    john.first_name = "Johnny".into();
    n.line("john.first_name", &john.first_name)?;
    n.line("john.last_name", &john.last_name)?;
    n.line("john.dob", &john.dob)?;
    n.line("julia.fav_num", julia.fav_num)?;
    n.line("julia.is_adult", julia.is_adult)?;
    n.blank()?;

    n.section("Comparing Struct Values")?;
    let copy = julia.clone();
    n.line("julia == copy?", julia == copy)?;
    n.line("julia == john?", julia == john)?;
    n.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lessons::render;

    fn output() -> String {
        render(|n| run(n, &CourseConfig::default()))
    }

    #[test]
    fn test_array_section() {
        let out = output();
        assert!(out.contains("arrC = [1 0 0 0 0 4 6 10 100 15 0 0 0 0 0]\n"));
        assert!(out.contains("arrF == arrG? = true\n"));
        assert!(out.contains("after writes, arrI = [15 25 35]\n"));
    }

    #[test]
    fn test_capacity_table() {
        let out = output();
        assert!(out.contains("[]\t0\t0\n"));
        assert!(out.contains("[10 20 30]\t3\t4\n"));
        assert!(out.contains("[10 20 30 40 50]\t5\t8\n"));
    }

    #[test]
    fn test_aliasing_sections() {
        let out = output();
        assert!(out.contains("sliceM = [x y z d]\n"));
        assert!(out.contains("subM3 = [y z]\n"));
        assert!(out.contains("after:  sliceM cap = 4 [x y zz d]\n"));
        assert!(out.contains("capacities: 5 3 2\n"));
        assert!(out.contains("subN1 = [b c d i j k]\n"));
        assert!(out.contains("subN2 = [c d z zz]\n"));
    }

    #[test]
    fn test_copy_sections() {
        let out = output();
        assert!(out.contains("dest = [1 2 3 4 5 0 0 0 0 0] copied 5 elements\n"));
        assert!(out.contains("dest = [1 2] copied 2 elements\n"));
        assert!(out.contains("After Copying: [2 3 4 4 5] copied 3 elements\n"));
        assert!(out.contains("into array: [1 2 3 4] [1 2 3 4]\n"));
        assert!(out.contains("bArray = [100 200 300 40000]\n"));
        assert!(out.contains("cArray = [10 20 30 40000]\n"));
    }

    #[test]
    fn test_map_sections() {
        let out = output();
        assert!(out.contains("totalWins = map[Kittens:1 Lions:3 Orcas:1]\n"));
        assert!(out.contains("hi => 0 false\n"));
        assert!(out.contains("set = [1 2 3 5 7 8 9 10] len = 8\n"));
    }

    #[test]
    fn test_out_of_range_is_reported() {
        let out = output();
        assert!(out.contains("sliceD[3] = index: index 3 out of range [0:3]\n"));
    }

    #[test]
    fn test_slice_declarations_and_range() {
        let out = output();
        assert!(out.contains("sliceA = [10 20 30 40]\n"));
        assert!(out.contains("sliceD = [15 20 30]\n0: 15\n1: 20\n2: 30\n"));
    }
}
