//! 测试用参考表：每个截面族一到两行，美制与公制数值各一份。

use crate::models::Table;
use crate::parsers::database::parse_database;

pub const DATABASE_CSV: &str = r#"Type,EDI_Std_Nomenclature,AISC_Manual_Label,W,A,d,Ht,bf,tw,tf,T,kdes,k1,Ix,Zx,Sx,rx,Iy,Zy,Sy,ry,rts,EDI_Std_Nomenclature.1,AISC_Manual_Label.1,W.1,A.1,d.1,Ht.1,bf.1,tw.1,tf.1,T.1,kdes.1,k1.1,Ix.1,Zx.1,Sx.1,rx.1,Iy.1,Zy.1,Sy.1,ry.1,rts.1
W,W44X335,W44X335,335,98.5,44,NaN,15.9,1.03,1.77,38,2.56,1.31,3.11e+04,1620,1410,17.8,1200,236,150,3.49,4.24,W1100X499,W1100X499,498.5,6.355e+04,1118,NaN,403.9,26.16,44.96,965.2,65.02,33.27,1.294e+04,2.655e+04,2.311e+04,452.1,499.4,3867,2458,88.65,107.7
W,W44X290,W44X290,290,85.4,43.6,NaN,15.8,0.865,1.58,38,2.36,1.25,2.7e+04,1410,1240,17.8,1040,205,132,3.49,NaN,W1100X433,W1100X433,431.5,5.51e+04,1107,NaN,401.3,21.97,40.13,965.2,59.94,31.75,1.124e+04,2.311e+04,2.032e+04,452.1,432.8,3359,2163,88.65,NaN
M,M12.5X12.4,M12.5X12.4,12.4,3.63,12.5,NaN,3.75,0.155,0.228,11.5,0.5,0.25,89.3,16.6,14.3,4.96,1.74,1.46,0.93,0.692,NaN,M318X18.5,M318X18.5,18.45,2342,317.5,NaN,95.25,3.937,5.791,292.1,12.7,6.35,37.17,272,234.3,126,0.7242,23.93,15.24,17.58,NaN
HP,HP18X204,HP18X204,204,60.2,18.3,NaN,18.1,1.13,1.13,15.5,1.83,1.25,3480,433,380,7.6,1120,191,124,4.31,NaN,HP460X304,HP460X304,303.6,3.884e+04,464.8,NaN,459.7,28.7,28.7,393.7,46.48,31.75,1448,7096,6227,193,466.1,3130,2032,109.5,NaN
S,S24X121,S24X121,121,35.5,24.5,NaN,8.05,0.8,1.09,20.5,2,NaN,3160,306,258,9.43,83,33.9,20.6,1.53,NaN,S610X180,S610X180,180,2.29e+04,622.3,NaN,204.5,20.32,27.69,520.7,50.8,NaN,1315,5014,4228,239.5,34.54,555.5,337.6,38.86,NaN
C,C15X50,C15X50,50,14.7,15,NaN,3.72,0.716,0.65,12.1,1.44,NaN,404,68.5,53.8,5.24,11,8.14,3.77,0.865,NaN,C380X74,C380X74,74.4,9484,381,NaN,94.49,18.19,16.51,307.3,36.58,NaN,168.1,1123,881.6,133.1,4.578,133.4,61.78,21.97,NaN
MC,MC18X58,MC18X58,58,17.1,18,NaN,4.2,0.7,0.625,15.5,1.25,NaN,675,95.4,75,6.29,17.6,10.7,5.28,1.02,NaN,MC460X86,MC460X86,86.3,1.103e+04,457.2,NaN,106.7,17.78,15.88,393.7,31.75,NaN,280.9,1563,1229,159.8,7.325,175.3,86.52,25.91,NaN
WT,WT22X167.5,WT22X167.5,167.5,49.2,22,NaN,15.9,1.03,1.77,19,2.56,NaN,2170,131,131,6.63,600,118,75.3,3.49,NaN,WT550X249.5,WT550X249.5,249.2,3.174e+04,558.8,NaN,403.9,26.16,44.96,482.6,65.02,NaN,903.2,2147,2147,168.4,249.7,1934,1234,88.65,NaN
MT,MT6.25X6.2,MT6.25X6.2,6.2,1.82,6.27,NaN,3.75,0.155,0.228,5.75,0.5,NaN,7.29,2.57,1.57,2,1,0.73,0.53,0.741,NaN,MT159X9.2,MT159X9.2,9.226,1174,159.3,NaN,95.25,3.937,5.791,146,12.7,NaN,3.034,42.11,25.73,50.8,0.4162,11.96,8.685,18.82,NaN
ST,ST12X60.5,ST12X60.5,60.5,17.8,12.3,NaN,8.05,0.8,1.09,NaN,2,NaN,259,47.3,29.1,3.82,41.7,17,10.4,1.53,NaN,ST305X90,ST305X90,90.02,1.148e+04,312.4,NaN,204.5,20.32,27.69,NaN,50.8,NaN,107.8,775.1,476.9,97.03,17.36,278.6,170.4,38.86,NaN
HSS,HSS20X12X5/8,HSS20X12X5/8,127,35,NaN,20,12,0.581,0.581,17.2,1.45,NaN,1880,230,188,7.33,851,162,142,4.93,NaN,HSS508X304.8X15.9,HSS508X304.8X15.9,189,2.258e+04,NaN,508,304.8,14.76,14.76,436.9,36.83,NaN,782.5,3769,3081,186.2,354.2,2655,2327,125.2,NaN
HSS,HSS16X16X5/8,HSS16X16X5/8,127,35,NaN,16,16,0.581,0.581,13.2,1.45,NaN,1370,200,171,6.25,1370,200,171,6.25,NaN,HSS406.4X406.4X15.9,HSS406.4X406.4X15.9,189,2.258e+04,NaN,406.4,406.4,14.76,14.76,335.3,36.83,NaN,570.2,3277,2802,158.8,570.2,3277,2802,158.8,NaN
L,L8X8X1-1/8,L8X8X1-1/8,56.9,16.8,8,NaN,NaN,NaN,NaN,NaN,NaN,NaN,98.1,31.6,17.5,2.41,98.1,31.6,17.5,2.41,NaN,L203X203X28.6,L203X203X28.6,84.67,1.084e+04,203.2,NaN,NaN,NaN,NaN,NaN,NaN,NaN,40.83,517.8,286.8,61.21,40.83,517.8,286.8,61.21,NaN
"#;

pub fn table() -> Table {
    parse_database(DATABASE_CSV.as_bytes()).unwrap()
}
